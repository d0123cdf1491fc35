//! Image loading and resampling onto the character grid.
//!
//! Decoding is handled by the `image` crate. Resampling is a strategy
//! behind the [`Resampler`] trait so the sampling policy can be chosen at
//! runtime. [`NearestNeighbor`] is the default and picks the source pixel
//! under each cell's center; the filter-backed variants blend neighbors
//! and give smoother (but different) output at non-integer scale ratios.

use std::path::Path;
use std::str::FromStr;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader, RgbaImage};

use crate::ascii::{ColorSample, SampleGrid};
use crate::config::ConfigError;
use crate::error::{Img2CharError, Result};

/// Resize an image to an exact target grid.
pub trait Resampler {
    /// Resize `image` to exactly `width x height` pixels.
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Pixel-center nearest-neighbor sampling.
///
/// For target column `x` the source column is
/// `floor((x + 0.5) * src_width / width)`, clamped to the image bounds.
/// Rows are mapped the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl Resampler for NearestNeighbor {
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        let (src_w, src_h) = image.dimensions();
        if src_w == 0 || src_h == 0 {
            return DynamicImage::ImageRgba8(RgbaImage::new(width, height));
        }

        let sx = src_w as f64 / width as f64;
        let sy = src_h as f64 / height as f64;

        let out = RgbaImage::from_fn(width, height, |x, y| {
            let src_x = (((x as f64 + 0.5) * sx) as u32).min(src_w - 1);
            let src_y = (((y as f64 + 0.5) * sy) as u32).min(src_h - 1);
            image.get_pixel(src_x, src_y)
        });

        DynamicImage::ImageRgba8(out)
    }

    fn name(&self) -> &'static str {
        "nearest"
    }
}

/// Resampling through one of the `image` crate's convolution filters.
#[derive(Debug, Clone, Copy)]
pub struct FilterResampler {
    filter: FilterType,
    name: &'static str,
}

impl Resampler for FilterResampler {
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        image.resize_exact(width, height, self.filter)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Selectable resampling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    #[default]
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl FromStr for ResampleFilter {
    type Err = ConfigError;

    /// Parse a filter name, ignoring case and `-`/`_` differences.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "nearest" => Ok(ResampleFilter::Nearest),
            "triangle" | "bilinear" => Ok(ResampleFilter::Triangle),
            "catmull-rom" | "catmullrom" | "bicubic" => Ok(ResampleFilter::CatmullRom),
            "gaussian" => Ok(ResampleFilter::Gaussian),
            "lanczos3" | "lanczos" => Ok(ResampleFilter::Lanczos3),
            _ => Err(ConfigError::InvalidValue {
                key: "render.filter",
                value: s.to_string(),
            }),
        }
    }
}

impl ResampleFilter {
    pub fn name(&self) -> &'static str {
        match self {
            ResampleFilter::Nearest => "nearest",
            ResampleFilter::Triangle => "triangle",
            ResampleFilter::CatmullRom => "catmull-rom",
            ResampleFilter::Gaussian => "gaussian",
            ResampleFilter::Lanczos3 => "lanczos3",
        }
    }

    /// Build the resampler for this policy.
    pub fn resampler(&self) -> Box<dyn Resampler> {
        let filtered = |filter| {
            Box::new(FilterResampler {
                filter,
                name: self.name(),
            }) as Box<dyn Resampler>
        };
        match self {
            ResampleFilter::Nearest => Box::new(NearestNeighbor),
            ResampleFilter::Triangle => filtered(FilterType::Triangle),
            ResampleFilter::CatmullRom => filtered(FilterType::CatmullRom),
            ResampleFilter::Gaussian => filtered(FilterType::Gaussian),
            ResampleFilter::Lanczos3 => filtered(FilterType::Lanczos3),
        }
    }
}

/// Decode the image at `path` and resample it to a `width x height` grid.
///
/// Images with an alpha channel yield samples with `Some(alpha)`; all other
/// color types (RGB, grayscale, palette) are expanded to RGB and yield
/// samples without alpha.
pub fn load_and_resize(
    path: &Path,
    width: u32,
    height: u32,
    resampler: &dyn Resampler,
) -> Result<SampleGrid> {
    if width == 0 || height == 0 {
        return Err(Img2CharError::InvalidDimensions { width, height });
    }
    if !path.exists() {
        return Err(Img2CharError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let unreadable = |source: image::ImageError| Img2CharError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| unreadable(image::ImageError::IoError(e)))?
        .decode()
        .map_err(unreadable)?;

    let has_alpha = image.color().has_alpha();
    log::info!(
        "Loaded '{}' ({}x{}, {:?}), resampling to {}x{} with {}",
        path.display(),
        image.width(),
        image.height(),
        image.color(),
        width,
        height,
        resampler.name()
    );

    let resized = resampler.resize(&image, width, height);
    Ok(to_sample_grid(&resized, has_alpha))
}

/// Read every pixel of an already-resized image into a sample grid.
pub fn to_sample_grid(image: &DynamicImage, has_alpha: bool) -> SampleGrid {
    let (width, height) = image.dimensions();
    if has_alpha {
        let rgba = image.to_rgba8();
        SampleGrid::from_fn(width, height, |x, y| {
            let p = rgba.get_pixel(x, y);
            ColorSample::rgba(p[0], p[1], p[2], p[3])
        })
    } else {
        let rgb = image.to_rgb8();
        SampleGrid::from_fn(width, height, |x, y| {
            let p = rgb.get_pixel(x, y);
            ColorSample::rgb(p[0], p[1], p[2])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    fn row_image(values: &[u8]) -> DynamicImage {
        let mut img = RgbImage::new(values.len() as u32, 1);
        for (x, &v) in values.iter().enumerate() {
            img.put_pixel(x as u32, 0, Rgb([v, 0, 0]));
        }
        DynamicImage::ImageRgb8(img)
    }

    fn red_row(image: &DynamicImage) -> Vec<u8> {
        image.to_rgb8().pixels().map(|p| p[0]).collect()
    }

    #[test]
    fn test_nearest_downscale_samples_centers() {
        let img = row_image(&[10, 20, 30, 40]);
        let out = NearestNeighbor.resize(&img, 2, 1);
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(red_row(&out), vec![20, 40]);
    }

    #[test]
    fn test_nearest_upscale_repeats_pixels() {
        let img = row_image(&[10, 20]);
        let out = NearestNeighbor.resize(&img, 4, 1);
        assert_eq!(red_row(&out), vec![10, 10, 20, 20]);
    }

    #[test]
    fn test_nearest_identity() {
        let img = row_image(&[1, 2, 3, 4, 5]);
        let out = NearestNeighbor.resize(&img, 5, 1);
        assert_eq!(red_row(&out), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_nearest_preserves_alpha() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 255, 255, 0]));
        let out = NearestNeighbor.resize(&DynamicImage::ImageRgba8(img), 2, 1);
        let grid = to_sample_grid(&out, true);
        assert_eq!(grid.get(0, 0), Some(ColorSample::rgba(0, 0, 0, 255)));
        assert_eq!(grid.get(1, 0), Some(ColorSample::rgba(255, 255, 255, 0)));
    }

    #[test]
    fn test_filter_resampler_exact_size() {
        let img = row_image(&[0, 50, 100, 150, 200, 250]);
        for filter in [
            ResampleFilter::Triangle,
            ResampleFilter::CatmullRom,
            ResampleFilter::Gaussian,
            ResampleFilter::Lanczos3,
        ] {
            let out = filter.resampler().resize(&img, 3, 2);
            assert_eq!(out.dimensions(), (3, 2), "filter {}", filter.name());
        }
    }

    #[test]
    fn test_to_sample_grid_without_alpha() {
        let grid = to_sample_grid(&row_image(&[7, 8]), false);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.get(1, 0), Some(ColorSample::rgb(8, 0, 0)));
    }

    #[test]
    fn test_filter_from_str() {
        let parse = |s: &str| s.parse::<ResampleFilter>().ok();
        assert_eq!(parse("nearest"), Some(ResampleFilter::Nearest));
        assert_eq!(parse("LANCZOS3"), Some(ResampleFilter::Lanczos3));
        assert_eq!(parse("catmull_rom"), Some(ResampleFilter::CatmullRom));
        assert_eq!(parse("bilinear"), Some(ResampleFilter::Triangle));
        assert_eq!(parse("sinc"), None);
    }

    #[test]
    fn test_filter_from_str_error_names_value() {
        let err = "sinc".parse::<ResampleFilter>().unwrap_err();
        assert!(err.to_string().contains("sinc"));
        assert!(err.to_string().contains("render.filter"));
    }

    #[test]
    fn test_resampler_names_match_filter() {
        for filter in [
            ResampleFilter::Nearest,
            ResampleFilter::Triangle,
            ResampleFilter::CatmullRom,
            ResampleFilter::Gaussian,
            ResampleFilter::Lanczos3,
        ] {
            assert_eq!(filter.resampler().name(), filter.name());
        }
    }

    #[test]
    fn test_load_rejects_zero_dimensions() {
        let err = load_and_resize(Path::new("whatever.png"), 0, 10, &NearestNeighbor).unwrap_err();
        assert!(matches!(
            err,
            Img2CharError::InvalidDimensions { width: 0, height: 10 }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_and_resize(
            Path::new("/definitely/not/here.png"),
            4,
            4,
            &NearestNeighbor,
        )
        .unwrap_err();
        assert!(matches!(err, Img2CharError::InputNotFound { .. }));
    }
}
