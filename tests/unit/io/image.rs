//! Tests for the `image` crate bridge: pixel access, conversions, load and save

#[cfg(test)]
mod tests {

    use image::RgbImage;
    use rasterfx::FilterError;
    use rasterfx::io::image::{load_rgb, save_rgb};
    use rasterfx::raster::{PixelBuffer, RgbBuffer};

    fn checker() -> RgbBuffer {
        let Ok(buffer) = RgbBuffer::from_fn(5, 4, |x, y| {
            if (x + y) % 2 == 0 {
                [250, 10, 10]
            } else {
                [x as u8 * 40, y as u8 * 60, 99]
            }
        }) else {
            unreachable!("5x4 buffer is valid");
        };
        buffer
    }

    // Tests RgbImage exposes its pixels through the buffer trait
    // Verified by swapping x and y in the adapter
    #[test]
    fn test_rgb_image_pixel_access() {
        let mut image = RgbImage::new(3, 2);
        PixelBuffer::set_pixel(&mut image, 2, 1, [1, 2, 3]);

        assert_eq!(PixelBuffer::width(&image), 3);
        assert_eq!(PixelBuffer::height(&image), 2);
        assert_eq!(PixelBuffer::get_pixel(&image, 2, 1), [1, 2, 3]);
        assert_eq!(image.get_pixel(2, 1).0, [1, 2, 3]);
    }

    // Tests adapter ignores out-of-range coordinates
    // Verified by using the panicking accessors
    #[test]
    fn test_rgb_image_out_of_range_is_inert() {
        let mut image = RgbImage::from_pixel(2, 2, image::Rgb([7, 7, 7]));
        PixelBuffer::set_pixel(&mut image, 9, 9, [0, 0, 0]);

        assert_eq!(PixelBuffer::get_pixel(&image, 9, 9), [0, 0, 0]);
        assert!(image.pixels().all(|p| p.0 == [7, 7, 7]));
    }

    // Tests conversions preserve every pixel
    // Verified by transposing in to_rgb_image
    #[test]
    fn test_buffer_image_conversions() {
        let buffer = checker();
        let image = buffer.to_rgb_image();

        assert_eq!(image.dimensions(), (5, 4));
        assert_eq!(image.get_pixel(1, 0).0, [40, 0, 99]);

        let Ok(back) = RgbBuffer::from_rgb_image(&image) else {
            unreachable!("image is not empty");
        };
        assert_eq!(back, buffer);
    }

    // Tests an empty image cannot become a buffer
    // Verified by removing dimension validation
    #[test]
    fn test_from_empty_rgb_image_fails() {
        let result = RgbBuffer::from_rgb_image(&RgbImage::new(0, 5));

        assert!(result.is_err_and(|e| e.is_invalid_argument()));
    }

    // Tests save then load reproduces the buffer through a lossless format
    // Verified by saving only the first row
    #[test]
    fn test_save_and_load_png() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let path = dir.path().join("nested").join("checker.png");
        let buffer = checker();

        assert!(save_rgb(&buffer, &path).is_ok());
        assert!(path.exists());

        let loaded = load_rgb(&path);
        assert_eq!(loaded.ok(), Some(buffer));
    }

    // Tests missing files report the path and keep the decoder error
    // Verified by dropping the path from the error
    #[test]
    fn test_load_missing_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let path = dir.path().join("missing.png");

        match load_rgb(&path) {
            Err(FilterError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => unreachable!("expected ImageLoad, got {other:?}"),
        }
    }

    // Tests unknown extensions fail as export errors
    // Verified by defaulting to PNG
    #[test]
    fn test_save_unknown_extension() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let path = dir.path().join("checker.unknown");

        let result = save_rgb(&checker(), &path);

        assert!(matches!(result, Err(FilterError::ImageExport { .. })));
    }
}
