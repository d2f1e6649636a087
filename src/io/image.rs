//! Source loading, downsampling, and PNG export
//!
//! The downsampler is the collaborator that produces the engine's working
//! canvas: the source dimensions divided by an integer factor, floored at
//! one pixel so the engine always sees a valid canvas.

use crate::io::error::{MosaicError, Result};
use image::RgbaImage;
use image::imageops::FilterType;
use std::path::Path;

/// Load a source image and decode it to row-major RGBA8
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] when the file cannot be opened or is
/// not a decodable image.
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Shrink the source by an integer factor to form the working canvas
///
/// A factor of one returns the buffer unchanged. Resulting dimensions
/// floor at one pixel.
pub fn downsample(source: &RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return source.clone();
    }

    let width = (source.width() / factor).max(1);
    let height = (source.height() / factor).max(1);
    image::imageops::resize(source, width, height, FilterType::Triangle)
}

/// Export a rendered buffer as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(buffer: &RgbaImage, output_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
