//! Color sample to character mapping.

use super::charset::Ramp;
use super::grayscale::luminance;
use super::sample::ColorSample;
use crate::error::{Img2CharError, Result};

/// Alpha denominator used when a sample carries no alpha channel.
/// One past the largest channel value, so full white stays inside the ramp.
pub const DEFAULT_ALPHA: f64 = 256.0;

/// What to do when a sample maps past the sparsest ramp level.
///
/// This happens for bright samples with partial alpha, since alpha is
/// the index denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Use the sparsest ramp character
    #[default]
    Clamp,
    /// Fail with [`Img2CharError::RampIndexOutOfRange`]
    Strict,
}

/// Compute the raw ramp index for an opaque or partially transparent sample.
///
/// index = floor((gray / alpha) * levels), where alpha defaults to 256.
/// The result may be `>= levels`; callers decide how to handle that.
pub fn ramp_index(sample: &ColorSample, levels: usize) -> usize {
    let gray = luminance(sample.r, sample.g, sample.b);
    let alpha = sample.a.map(f64::from).unwrap_or(DEFAULT_ALPHA);
    ((gray / alpha) * levels as f64).floor() as usize
}

/// Map one color sample to one character.
///
/// Fully transparent samples (alpha 0) become a space regardless of color.
/// Everything else is converted to grayscale and looked up in `ramp`,
/// with out-of-range indices handled by `policy`.
///
/// # Example
/// ```
/// use img2char::ascii::{sample_to_char, ColorSample, OverflowPolicy, Ramp};
///
/// let black = ColorSample::rgb(0, 0, 0);
/// let c = sample_to_char(&black, &Ramp::density(), OverflowPolicy::Clamp).unwrap();
/// assert_eq!(c, '$');
/// ```
pub fn sample_to_char(sample: &ColorSample, ramp: &Ramp, policy: OverflowPolicy) -> Result<char> {
    map_sample(sample, ramp, policy).map(|(c, _)| c)
}

/// Like [`sample_to_char`], also reporting whether the index was clamped.
pub(super) fn map_sample(
    sample: &ColorSample,
    ramp: &Ramp,
    policy: OverflowPolicy,
) -> Result<(char, bool)> {
    if sample.is_transparent() {
        return Ok((' ', false));
    }

    let index = ramp_index(sample, ramp.len());
    match ramp.get(index) {
        Some(c) => Ok((c, false)),
        None => match policy {
            OverflowPolicy::Clamp => Ok((ramp.lightest(), true)),
            OverflowPolicy::Strict => Err(Img2CharError::RampIndexOutOfRange {
                index,
                len: ramp.len(),
            }),
        },
    }
}
