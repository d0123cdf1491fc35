//! img2char library crate.
//!
//! Converts a raster image into monospace character art: the image is
//! resampled to a WIDTH x HEIGHT grid, every cell is mapped to a glyph from
//! a 70-level density ramp, and the text is printed and written to a file.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod resample;
pub mod settings;

use std::io::Write;

use ascii::Ramp;
use error::Result;
use settings::RenderSettings;

pub use error::Img2CharError;

/// Load, resample and render the image described by `settings`.
pub fn convert(settings: &RenderSettings) -> Result<String> {
    let resampler = settings.filter.resampler();
    let grid = resample::load_and_resize(
        &settings.file,
        settings.width,
        settings.height,
        resampler.as_ref(),
    )?;
    ascii::render(
        &grid,
        settings.width,
        settings.height,
        &Ramp::density(),
        settings.overflow,
    )
}

/// Render and send the text to `out` and to the output file.
pub fn run_with<W: Write>(settings: RenderSettings, out: &mut W) -> Result<()> {
    let text = convert(&settings)?;
    output::print_to(out, &text)?;
    output::write_text(&settings.output, &text)
}

/// Render and send the text to stdout and to the output file.
pub fn run(settings: RenderSettings) -> Result<()> {
    run_with(settings, &mut std::io::stdout().lock())
}
