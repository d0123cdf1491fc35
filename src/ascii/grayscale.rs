//! RGB to grayscale conversion using fixed luminance weights.

/// Red channel weight, scaled by [`WEIGHT_SCALE`].
pub const WEIGHT_R: u32 = 2126;
/// Green channel weight, scaled by [`WEIGHT_SCALE`].
pub const WEIGHT_G: u32 = 7125;
/// Blue channel weight, scaled by [`WEIGHT_SCALE`].
pub const WEIGHT_B: u32 = 722;
/// Divisor applied to the weighted sum.
pub const WEIGHT_SCALE: f64 = 10000.0;

/// Convert an RGB triple to a grayscale value.
///
/// The formula is: gray = (2126*R + 7125*G + 722*B) / 10000
///
/// The weighted sum is accumulated with integer math and divided as a
/// real number, so the fractional part is preserved. The weights sum to
/// 9973, which puts pure white at 254.3115 rather than 255.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    let weighted = WEIGHT_R * r as u32 + WEIGHT_G * g as u32 + WEIGHT_B * b as u32;
    weighted as f64 / WEIGHT_SCALE
}
