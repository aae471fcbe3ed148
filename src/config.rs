//! Layout configuration.
//!
//! All geometry constants of the layout engine live here. A configuration
//! file may set any subset of the fields; the rest keep their defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Scale, sizing and spacing constants for the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Year that maps to pixel offset 0
    pub origin_year: i32,
    /// Horizontal scale
    pub pixels_per_year: f64,
    /// Minimum projected width of any item
    pub min_width: f64,
    /// Average character width as a fraction of the font size
    pub char_width_factor: f64,
    pub title_font_size: f64,
    pub organization_font_size: f64,
    /// Horizontal padding added to the widest label
    pub label_padding: f64,
    /// Lower bound of a widened item
    pub min_comfortable_width: f64,
    /// How far a trailing item may grow past its nominal end, in months
    pub max_extension_months: f64,
    pub track_height: f64,
    /// Height of an item that shares its track span with another item
    pub compact_height: f64,
    pub sub_row_spacing: f64,
    pub top_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_year: 2020,
            pixels_per_year: 400.0,
            min_width: 60.0,
            char_width_factor: 0.6,
            title_font_size: 11.0,
            organization_font_size: 10.0,
            label_padding: 24.0,
            min_comfortable_width: 120.0,
            max_extension_months: 2.0,
            track_height: 120.0,
            compact_height: 50.0,
            sub_row_spacing: 5.0,
            top_margin: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout config: {}", path))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Failed to parse layout config: {}", path))?;
        log::info!("Loaded layout config from {}", path);
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        if config.pixels_per_year <= 0.0 {
            anyhow::bail!("pixels_per_year must be positive, got {}", config.pixels_per_year);
        }
        if config.track_height <= 0.0 {
            anyhow::bail!("track_height must be positive, got {}", config.track_height);
        }
        Ok(config)
    }

    pub fn pixels_per_month(&self) -> f64 {
        self.pixels_per_year / 12.0
    }

    /// Height given to an item that overlaps nothing.
    pub fn full_height(&self) -> f64 {
        self.track_height - 20.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.origin_year, 2020);
        assert!((config.pixels_per_month() - 33.333_333).abs() < 1e-3);
        assert_eq!(config.full_height(), 100.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LayoutConfig::from_json(r#"{ "origin_year": 2018, "track_height": 160 }"#).unwrap();
        assert_eq!(config.origin_year, 2018);
        assert_eq!(config.track_height, 160.0);
        assert_eq!(config.pixels_per_year, 400.0);
        assert_eq!(config.compact_height, 50.0);
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        assert!(LayoutConfig::from_json(r#"{ "pixels_per_year": 0 }"#).is_err());
        assert!(LayoutConfig::from_json("not json").is_err());
    }
}
