//! Resolved render settings.
//!
//! [`RenderSettings`] is built once from CLI arguments and the config file
//! and passed by value into [`crate::run`]. Precedence is CLI flag, then
//! config file, then the built-in default.

use std::path::PathBuf;

use crate::ascii::OverflowPolicy;
use crate::cli::Args;
use crate::config::Config;
use crate::error::{Img2CharError, Result};
use crate::resample::ResampleFilter;

pub const DEFAULT_WIDTH: u32 = 80;
pub const DEFAULT_HEIGHT: u32 = 80;
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Everything one render run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub file: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub filter: ResampleFilter,
    pub overflow: OverflowPolicy,
}

impl RenderSettings {
    /// Settings for `file` with every other option at its default.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        RenderSettings {
            file: file.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            filter: ResampleFilter::default(),
            overflow: OverflowPolicy::default(),
        }
    }

    /// Merge CLI arguments over the config file.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self> {
        let render = &config.render;

        let width = args.width.or(render.width).unwrap_or(DEFAULT_WIDTH);
        let height = args.height.or(render.height).unwrap_or(DEFAULT_HEIGHT);
        if width == 0 || height == 0 {
            return Err(Img2CharError::InvalidDimensions { width, height });
        }

        let filter = match (args.filter, render.filter.as_deref()) {
            (Some(f), _) => f.into(),
            (None, Some(name)) => name.parse::<ResampleFilter>()?,
            (None, None) => ResampleFilter::default(),
        };

        let overflow = if args.strict || render.strict {
            OverflowPolicy::Strict
        } else {
            OverflowPolicy::Clamp
        };

        let output = args
            .output
            .clone()
            .or_else(|| render.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(RenderSettings {
            file: args.file.clone(),
            output,
            width,
            height,
            filter,
            overflow,
        })
    }
}
