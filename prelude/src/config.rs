//! Rendering constants shared by everything that draws the board

use std::{error, fmt};

use serde::{Deserialize, Serialize};

/// Geometry constants, in plane units (pixels when drawn as SVG)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Distance between neighbouring cell centers
    pub cell_spacing: f32,
    /// How far from each vertex the rounding curves start
    pub corner_radius: f32,
    /// How far the halo outline sits outside the region
    pub halo_distance: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            cell_spacing: 24.,
            corner_radius: 4.,
            halo_distance: 8.,
        }
    }
}

impl RenderConfig {
    /// Reads a (possibly partial) JSON config, filling the gaps with defaults
    pub fn from_json(s: &str) -> eyre::Result<Self> {
        let config: RenderConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        use ConfigError::*;
        if !self.cell_spacing.is_finite() || self.cell_spacing <= 0. {
            return Err(BadCellSpacing(self.cell_spacing));
        }
        for (name, value) in [
            ("corner_radius", self.corner_radius),
            ("halo_distance", self.halo_distance),
        ] {
            if !value.is_finite() || value < 0. {
                return Err(NegativeOrNonFinite(name, value));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    BadCellSpacing(f32),
    NegativeOrNonFinite(&'static str, f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ConfigError::*;
        match self {
            BadCellSpacing(v) => write!(f, "Cell spacing must be a positive number, got {v}"),
            NegativeOrNonFinite(name, v) => {
                write!(f, "'{name}' must be a non-negative number, got {v}")
            }
        }
    }
}

impl error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RenderConfig::from_json(r#"{ "corner_radius": 2.5 }"#).unwrap();
        assert_eq!(config.corner_radius, 2.5);
        assert_eq!(config.cell_spacing, 24.);
        assert_eq!(config.halo_distance, 8.);
    }

    #[test]
    fn rejects_unusable_constants() {
        assert!(RenderConfig::from_json(r#"{ "cell_spacing": 0 }"#).is_err());
        assert!(RenderConfig::from_json(r#"{ "halo_distance": -1 }"#).is_err());
        let config = RenderConfig {
            corner_radius: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            config.validate().map_err(|e| e.to_string()),
            Err("'corner_radius' must be a non-negative number, got NaN".to_string())
        );
    }
}
