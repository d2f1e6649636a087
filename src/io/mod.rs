//! Input/output operations, painting, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Defaults and display constants
pub mod configuration;
/// Error types for mosaic rendering operations
pub mod error;
/// Source loading, downsampling, and PNG export
pub mod image;
/// Region fill and border painting
pub mod painter;
/// Progress reporting for batch renders
pub mod progress;
/// Progressive-refinement GIF capture and export
pub mod visualization;
