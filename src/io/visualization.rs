//! Frame capture and GIF export of the progressive refinement
//!
//! The painter refines the output buffer in place, so a frame is just a
//! snapshot of that buffer. Snapshots are taken every Nth successful split
//! and replayed as an animated GIF.

use crate::io::error::{MosaicError, Result};
use image::{Frame, RgbaImage};

/// Captures output snapshots during decomposition
pub struct VisualizationCapture {
    frames: Vec<RgbaImage>,
    capture_interval: usize,
    splits_seen: usize,
}

impl VisualizationCapture {
    /// Create a capture that keeps every `capture_interval`-th snapshot
    ///
    /// An interval of zero is treated as one (capture every split).
    pub const fn new(capture_interval: usize) -> Self {
        Self {
            frames: Vec::new(),
            capture_interval: if capture_interval == 0 {
                1
            } else {
                capture_interval
            },
            splits_seen: 0,
        }
    }

    /// Record the current output buffer if the interval has elapsed
    pub fn capture(&mut self, output: &RgbaImage) {
        self.splits_seen += 1;
        if self.splits_seen % self.capture_interval == 0 {
            self.frames.push(output.clone());
        }
    }

    /// Record the final output buffer unconditionally
    pub fn capture_final(&mut self, output: &RgbaImage) {
        self.frames.push(output.clone());
    }

    /// Number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// Skips frames when the requested delay is below what viewers
    /// reliably support, keeping the apparent animation speed. The final
    /// frame is held longer for visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;

        if self.frames.is_empty() {
            return Err(MosaicError::InvalidSourceData {
                reason: "No frames captured for visualization".to_string(),
            });
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let mut frames = Vec::new();
        for (index, buffer) in self.frames.iter().enumerate() {
            if index % skip_factor == 0 {
                frames.push(Frame::from_parts(
                    buffer.clone(),
                    0,
                    0,
                    image::Delay::from_numer_denom_ms(effective_delay_ms, 1),
                ));
            }
        }

        // Final frame displays longer for better visibility
        if let Some(last) = self.frames.last() {
            frames.push(Frame::from_parts(
                last.clone(),
                0,
                0,
                image::Delay::from_numer_denom_ms(effective_delay_ms * 25, 1),
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MosaicError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MosaicError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}
