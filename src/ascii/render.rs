//! Assembly of mapped characters into a text grid.

use super::charset::Ramp;
use super::mapping::{map_sample, OverflowPolicy};
use super::sample::SampleGrid;
use crate::error::{Img2CharError, Result};

/// Render a sample grid as character art.
///
/// Rows are emitted top to bottom, columns left to right, and every row
/// (including the last) ends with `'\n'`. The result always holds
/// `height * (width + 1)` characters.
///
/// # Arguments
/// * `grid` - Samples in row-major order, exactly `width * height` of them
/// * `width` - Expected grid width in characters
/// * `height` - Expected grid height in characters
/// * `ramp` - Character ramp, densest first
/// * `policy` - How to handle samples that map past the sparsest level
///
/// # Errors
/// `InvalidDimensions` for a zero width or height, `GridMismatch` when the
/// grid shape differs from `width x height`, and `RampIndexOutOfRange`
/// under [`OverflowPolicy::Strict`].
pub fn render(
    grid: &SampleGrid,
    width: u32,
    height: u32,
    ramp: &Ramp,
    policy: OverflowPolicy,
) -> Result<String> {
    if width == 0 || height == 0 {
        return Err(Img2CharError::InvalidDimensions { width, height });
    }
    if grid.width() != width || grid.height() != height {
        return Err(Img2CharError::GridMismatch {
            expected: (width, height),
            actual: (grid.width(), grid.height()),
        });
    }

    let mut text = String::with_capacity((height as usize) * (width as usize + 1));
    let mut clamped = 0usize;

    for row in grid.rows() {
        for sample in row {
            let (c, was_clamped) = map_sample(sample, ramp, policy)?;
            if was_clamped {
                clamped += 1;
            }
            text.push(c);
        }
        text.push('\n');
    }

    log::debug!(
        "Rendered {}x{} grid ({} cells clamped to the lightest level)",
        width,
        height,
        clamped
    );

    Ok(text)
}
