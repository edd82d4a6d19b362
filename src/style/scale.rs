//! Color scales for resolved node colors.
//!
//! A layer's raw color values are classified once. Numeric layers map each
//! value onto a low→high gradient; categorical layers hash each category
//! into a fixed ten-color palette.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::stringify;
use crate::config::ScaleConfig;
use crate::error::NetVisError;

/// d3 category10.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = NetVisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = HEX_COLOR
            .captures(s.trim())
            .ok_or_else(|| NetVisError::InvalidConfig(format!("'{s}' is not a #rrggbb color")))?;
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).unwrap_or_default();
        Ok(Rgb::new(channel(1), channel(2), channel(3)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Numeric,
    Categorical,
}

/// Numeric when more than half of the non-null values are numbers.
pub fn classify(values: &[Option<Value>]) -> ScaleKind {
    let present: Vec<&Value> = values.iter().flatten().filter(|v| !v.is_null()).collect();
    let numeric = present.iter().filter(|v| v.is_number()).count();
    if numeric * 2 > present.len() {
        ScaleKind::Numeric
    } else {
        ScaleKind::Categorical
    }
}

/// Palette color for a category. Stable for a given string.
pub fn categorical_color(category: &str) -> &'static str {
    let mut hasher = DefaultHasher::new();
    category.hash(&mut hasher);
    PALETTE[(hasher.finish() % PALETTE.len() as u64) as usize]
}

/// Gradient color for `value` within [min, max]. A zero-width range maps to
/// the midpoint.
pub fn numeric_color(value: f64, min: f64, max: f64, low: Rgb, high: Rgb) -> String {
    let ratio = if max == min {
        0.5
    } else {
        (value - min) / (max - min)
    };
    low.lerp(high, ratio).to_string()
}

/// A scale fitted to one layer's raw values.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    pub kind: ScaleKind,
    min: f64,
    max: f64,
    low: Rgb,
    high: Rgb,
}

impl ColorScale {
    pub fn fit(values: &[Option<Value>], low: Rgb, high: Rgb) -> Self {
        let kind = classify(values);
        let numbers = values.iter().flatten().filter_map(Value::as_f64);
        let (min, max) = numbers.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        Self {
            kind,
            min,
            max,
            low,
            high,
        }
    }

    /// Color for one raw value. Non-numeric values in a numeric scale fall
    /// back to their palette color.
    pub fn color_for(&self, value: &Value) -> Option<String> {
        if let (ScaleKind::Numeric, Some(v)) = (self.kind, value.as_f64()) {
            return Some(numeric_color(v, self.min, self.max, self.low, self.high));
        }
        stringify(value).map(|category| categorical_color(&category).to_string())
    }
}

/// Classify `values` and map each to an output color. Absent stays absent.
pub fn apply(values: &[Option<Value>], config: &ScaleConfig) -> Vec<Option<String>> {
    let scale = ColorScale::fit(values, config.low, config.high);
    values
        .iter()
        .map(|v| v.as_ref().and_then(|v| scale.color_for(v)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_style_scale.rs"]
mod tests;
