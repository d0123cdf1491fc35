//! Color samples and the grid that holds them.

/// One color sample per character cell.
///
/// `a` is `None` when the source image has no alpha channel, which the
/// mapper treats as fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl ColorSample {
    /// An opaque sample from a source without an alpha channel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSample { r, g, b, a: None }
    }

    /// A sample carrying an explicit alpha value.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorSample { r, g, b, a: Some(a) }
    }

    /// True when the sample is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.a == Some(0)
    }
}

/// A row-major grid of color samples, `width * height` in size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    width: u32,
    height: u32,
    samples: Vec<ColorSample>,
}

impl SampleGrid {
    /// Build a grid from row-major samples.
    ///
    /// Returns `None` if `samples.len()` does not equal `width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<ColorSample>) -> Option<Self> {
        if samples.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(SampleGrid {
            width,
            height,
            samples,
        })
    }

    /// Build a grid by calling `f(x, y)` for every cell in row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> ColorSample,
    {
        let mut samples = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        SampleGrid {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<ColorSample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.samples.get(idx).copied()
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorSample]> {
        // chunks_exact panics on zero, and a zero-width grid has no samples anyway
        self.samples.chunks_exact(self.width.max(1) as usize)
    }
}
