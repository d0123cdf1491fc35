//! Density mapping from color samples to character art.
//!
//! The pipeline for one grid cell:
//!
//! 1. **Grayscale conversion** - weighted RGB sum (2126/7125/722 over 10000)
//! 2. **Index computation** - gray divided by alpha (256 when absent), scaled to the ramp
//! 3. **Character lookup** - one glyph from the 70-level [`DENSITY_RAMP`]
//!
//! Fully transparent samples short-circuit to a space. [`render`] applies
//! this to every cell of a [`SampleGrid`] in row-major order.

mod charset;
mod grayscale;
mod mapping;
mod render;
mod sample;

pub use charset::{Ramp, DENSITY_RAMP};
pub use grayscale::{luminance, WEIGHT_B, WEIGHT_G, WEIGHT_R, WEIGHT_SCALE};
pub use mapping::{ramp_index, sample_to_char, OverflowPolicy, DEFAULT_ALPHA};
pub use render::render;
pub use sample::{ColorSample, SampleGrid};
