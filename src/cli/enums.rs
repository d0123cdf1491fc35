//! CLI enum types for the resampling filter.

use clap::ValueEnum;

use crate::resample::ResampleFilter;

/// Resampling filter used to reduce the image to the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    /// Source pixel under each cell center (fastest, no blending)
    #[default]
    Nearest,
    /// Bilinear
    Triangle,
    /// Bicubic
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Filter> for ResampleFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => ResampleFilter::Nearest,
            Filter::Triangle => ResampleFilter::Triangle,
            Filter::CatmullRom => ResampleFilter::CatmullRom,
            Filter::Gaussian => ResampleFilter::Gaussian,
            Filter::Lanczos3 => ResampleFilter::Lanczos3,
        }
    }
}
