//! Tests for the editing session and its load precondition

#[cfg(test)]
mod tests {

    use rand::{SeedableRng, rngs::StdRng};
    use rasterfx::io::configuration::DEFAULT_SEED;
    use rasterfx::io::image::save_rgb;
    use rasterfx::raster::{PixelBuffer, RgbBuffer};
    use rasterfx::{ImageSession, Preset};

    fn red_square() -> RgbBuffer {
        let Ok(buffer) = RgbBuffer::filled(4, 4, [255, 0, 0]) else {
            unreachable!("4x4 buffer is valid");
        };
        buffer
    }

    // Tests every filter refuses to run before an image is loaded
    // Verified by running filters on a default image
    #[test]
    fn test_filters_require_loaded_image() {
        let mut session = ImageSession::new();
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);

        let results = [
            session.grayscale(),
            session.sepia(),
            session.dither(),
            session.apply_preset(Preset::Sepia),
            session.mosaic(3, &mut rng).map(|_| ()),
        ];

        for result in results {
            let Err(error) = result else {
                unreachable!("filter ran without an image");
            };
            assert!(error.is_invalid_state());
            assert_eq!(error.to_string(), "Must load an image first");
        }
        assert!(!session.is_loaded());
    }

    // Tests saving without an image fails with the same precondition
    // Verified by saving an empty placeholder
    #[test]
    fn test_save_requires_loaded_image() {
        let session = ImageSession::default();

        assert!(
            session
                .save("never-written.png")
                .is_err_and(|e| e.is_invalid_state())
        );
    }

    // Tests filters run on the held image in place
    // Verified by filtering a copy of the image
    #[test]
    fn test_filters_mutate_held_image() {
        let mut session = ImageSession::with_image(red_square());

        assert!(session.grayscale().is_ok());
        assert_eq!(session.image().map(|img| img.get_pixel(3, 3)), Some([54, 54, 54]));

        assert!(session.dither().is_ok());
        assert!(
            session
                .image()
                .is_some_and(|img| img.get_pixel(0, 0) == [0, 0, 0])
        );
    }

    // Tests mosaic through the session returns the drawn seeds
    // Verified by discarding the seed list
    #[test]
    fn test_session_mosaic_returns_seeds() {
        let mut session = ImageSession::with_image(red_square());
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);

        let seeds = session.mosaic(5, &mut rng);

        assert_eq!(seeds.map(|s| s.len()).ok(), Some(5));
        assert_eq!(session.image(), Some(&red_square()));
    }

    // Tests taking the image returns the session to the unloaded state
    // Verified by cloning instead of taking
    #[test]
    fn test_take_image() {
        let mut session = ImageSession::new();
        session.set_image(red_square());
        assert!(session.is_loaded());

        assert_eq!(session.take_image(), Some(red_square()));
        assert!(!session.is_loaded());
        assert!(session.require_image().is_err_and(|e| e.is_invalid_state()));
    }

    // Tests load replaces the image and a failed load keeps the previous one
    // Verified by clearing the image before loading
    #[test]
    fn test_load_from_disk() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let path = dir.path().join("square.png");
        assert!(save_rgb(&red_square(), &path).is_ok());

        let mut session = ImageSession::new();
        assert!(session.load(&path).is_ok());
        assert_eq!(session.image(), Some(&red_square()));

        assert!(session.sepia().is_ok());
        let toned = session.image().cloned();

        assert!(session.load(dir.path().join("missing.png")).is_err());
        assert_eq!(session.image().cloned(), toned);
    }

    // Tests save writes the current image
    // Verified by saving the original instead of the filtered image
    #[test]
    fn test_save_filtered_image() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let path = dir.path().join("gray.png");

        let mut session = ImageSession::with_image(red_square());
        assert!(session.grayscale().is_ok());
        assert!(session.save(&path).is_ok());

        let mut reloaded = ImageSession::new();
        assert!(reloaded.load(&path).is_ok());
        assert_eq!(reloaded.image(), session.image());
    }
}
