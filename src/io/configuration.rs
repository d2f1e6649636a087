//! Defaults and display constants

// Default values for configurable parameters
/// Area weighting applied in the selection heuristic
pub const DEFAULT_SIZE_RATIO: f64 = 0.2;

/// Unsplittable-region encounters tolerated before stopping
pub const DEFAULT_MAX_LIMIT_COUNT: u32 = 1000;

/// Half-dimension floor below which splitting refuses
pub const DEFAULT_MINIMUM_SPLIT_WIDTH: u32 = 2;

/// Border darkness relative to the fill color
pub const DEFAULT_LINE_LUMINANCE_SCALE: f64 = 0.8;

/// Fill brightness multiplier; 1.0 paints exact channel means
pub const DEFAULT_LUMINANCE_SCALE: f64 = 1.0;

/// Downsampling divisor applied to the source before the engine runs
pub const DEFAULT_DOWNSAMPLE_FACTOR: u32 = 4;

/// Fixed seed for reproducible stochastic selection
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";

/// Successful splits between visualization snapshots
pub const VISUALIZATION_CAPTURE_INTERVAL: usize = 8;

/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;

/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
