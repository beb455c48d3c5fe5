//! Filter constants and runtime configuration defaults

/// Largest value an 8-bit channel can hold
pub const MAX_CHANNEL: u8 = 255;

// ITU-R BT.709 luma coefficients
/// Weights of red, green and blue in perceived brightness
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Rows of the sepia toning matrix (output red, green, blue)
pub const SEPIA_ROWS: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

// Error diffusion weights are expressed in sixteenths
/// Denominator shared by all diffusion weights
pub const DIFFUSION_DENOMINATOR: f64 = 16.0;
/// Share of the error pushed to the pixel below
pub const DIFFUSION_BELOW: f64 = 7.0;
/// Share of the error pushed up and to the right (into the scanned row)
pub const DIFFUSION_ABOVE_RIGHT: f64 = 3.0;
/// Share of the error pushed to the right
pub const DIFFUSION_RIGHT: f64 = 5.0;
/// Share of the error pushed down and to the right
pub const DIFFUSION_BELOW_RIGHT: f64 = 1.0;

/// Fixed seed for reproducible mosaic generation
pub const DEFAULT_SEED: u64 = 42;
