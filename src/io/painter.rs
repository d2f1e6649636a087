//! Mosaic painter: writes accepted regions into the output buffer
//!
//! Painting happens at region creation time (seed and every split child),
//! never at loop end, so the output buffer is a valid mosaic at any
//! iteration boundary — including after cancellation.

use crate::algorithm::executor::{Mode, RenderOptions};
use crate::algorithm::region::Region;
use crate::analysis::statistics::MeanColor;
use crate::math::luminance::scale_channel;
use image::{Rgba, RgbaImage};

/// Paints region fills and optional borders into the output buffer
#[derive(Debug, Clone, Copy)]
pub struct MosaicPainter {
    mode: Mode,
    line_luminance_scale: f64,
    luminance_scale: f64,
    monochrome: bool,
    swap_stroke: bool,
}

impl MosaicPainter {
    /// Build a painter from validated render options
    pub const fn from_options(options: &RenderOptions) -> Self {
        Self {
            mode: options.mode,
            line_luminance_scale: options.line_luminance_scale,
            luminance_scale: options.luminance_scale,
            monochrome: options.monochrome,
            swap_stroke: options.swap_stroke,
        }
    }

    /// Paint a region's mean color over its rectangle
    ///
    /// In bordered mode the rectangle outline is stroked with the fill
    /// color attenuated by the line luminance scale; `swap_stroke` inverts
    /// which of interior and outline receives the attenuation.
    pub fn paint(&self, output: &mut RgbaImage, region: &Region) {
        let fill = self.fill_color(&region.stats.mean);
        match self.mode {
            Mode::Plain => {
                fill_rect(output, region, fill);
            }
            Mode::PlainWithBorder => {
                let line = self.line_color(&region.stats.mean);
                let (interior, outline) = if self.swap_stroke {
                    (line, fill)
                } else {
                    (fill, line)
                };
                fill_rect(output, region, interior);
                stroke_rect(output, region, outline);
            }
        }
    }

    fn fill_color(&self, mean: &MeanColor) -> Rgba<u8> {
        self.scaled_color(mean, self.luminance_scale)
    }

    fn line_color(&self, mean: &MeanColor) -> Rgba<u8> {
        self.scaled_color(mean, self.luminance_scale * self.line_luminance_scale)
    }

    fn scaled_color(&self, mean: &MeanColor, scale: f64) -> Rgba<u8> {
        let (r, g, b) = if self.monochrome {
            let luma = mean.luminance();
            (luma, luma, luma)
        } else {
            (mean.r, mean.g, mean.b)
        };
        Rgba([
            scale_channel(r, scale),
            scale_channel(g, scale),
            scale_channel(b, scale),
            255,
        ])
    }
}

fn fill_rect(output: &mut RgbaImage, region: &Region, color: Rgba<u8>) {
    let rect = region.rect;
    for row in rect.y..rect.y + rect.height {
        for col in rect.x..rect.x + rect.width {
            output.put_pixel(col, row, color);
        }
    }
}

fn stroke_rect(output: &mut RgbaImage, region: &Region, color: Rgba<u8>) {
    let rect = region.rect;
    let right = rect.x + rect.width - 1;
    let bottom = rect.y + rect.height - 1;

    for col in rect.x..=right {
        output.put_pixel(col, rect.y, color);
        output.put_pixel(col, bottom, color);
    }
    for row in rect.y..=bottom {
        output.put_pixel(rect.x, row, color);
        output.put_pixel(right, row, color);
    }
}
