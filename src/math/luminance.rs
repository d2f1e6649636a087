//! NTSC luminance weighting shared by the statistics calculator and painter
//!
//! The Rec. 601 coefficients weight the channels by perceived brightness.
//! The diff score and the monochrome fill both reduce colors through this
//! combination, so the constants live here rather than with either caller.

/// Red channel weight in the NTSC luminance combination
pub const NTSC_RED_WEIGHT: f64 = 0.2989;
/// Green channel weight in the NTSC luminance combination
pub const NTSC_GREEN_WEIGHT: f64 = 0.587;
/// Blue channel weight in the NTSC luminance combination
pub const NTSC_BLUE_WEIGHT: f64 = 0.114;

/// Perceived brightness of an RGB triple under the NTSC weighting
pub fn ntsc_luminance(r: f64, g: f64, b: f64) -> f64 {
    r.mul_add(
        NTSC_RED_WEIGHT,
        g.mul_add(NTSC_GREEN_WEIGHT, b * NTSC_BLUE_WEIGHT),
    )
}

/// Scale a channel value and saturate into the displayable byte range
pub fn scale_channel(value: f64, scale: f64) -> u8 {
    (value * scale).round().clamp(0.0, 255.0) as u8
}
