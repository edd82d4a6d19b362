//! Configuration for the conversion pipeline.
//!
//! Every field has a default; the CLI and `Plotter` override individual
//! values before handing the config to the adapter.

use std::str::FromStr;

use crate::error::NetVisError;
use crate::style::scale::Rgb;

/// Default number of simulation steps for the spring layout.
pub const DEFAULT_ITERATIONS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Simulation steps for iterative layouts.
    pub iterations: usize,
    /// Seed for random initial placement. None = non-reproducible layouts.
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

/// How resolved node colors are turned into output colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Raw attribute values are stringified and passed through.
    #[default]
    Raw,
    /// Raw values are classified as numeric or categorical and mapped to a
    /// gradient or palette color.
    Scaled,
}

impl FromStr for ColorMode {
    type Err = NetVisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" | "none" => Ok(ColorMode::Raw),
            "scaled" | "scale" | "auto" => Ok(ColorMode::Scaled),
            other => Err(NetVisError::InvalidConfig(format!(
                "unknown color mode '{other}'; use raw or scaled"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleConfig {
    pub mode: ColorMode,
    /// Gradient start for numeric scales.
    pub low: Rgb,
    /// Gradient end for numeric scales.
    pub high: Rgb,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            mode: ColorMode::Raw,
            low: Rgb::new(0x44, 0x01, 0x54),
            high: Rgb::new(0xfd, 0xe7, 0x25),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    pub layout: LayoutConfig,
    pub scale: ScaleConfig,
}

impl ConvertConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the layout seed so repeated conversions produce identical positions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.layout.seed = Some(seed);
        self
    }

    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.scale.mode = mode;
        self
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
