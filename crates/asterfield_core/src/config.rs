//! Exposed tuning parameters.
//!
//! Loaded once at startup (TOML) or constructed directly. Any change to a
//! live component goes through full teardown + rebuild - there is no
//! incremental resize path. Out-of-range counts are clamped, never fatal.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// Parameters of the hierarchical field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Children attached to each part of the previous level. Clamped to >= 1.
    pub child_count: usize,
    /// Spin speed about the local up axis, degrees per second.
    pub angular_speed_deg: f32,
    /// Base orbit radius baked into each child direction at creation.
    pub radius: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            child_count: 150,
            angular_speed_deg: 80.0,
            radius: 15.0,
        }
    }
}

impl FieldConfig {
    /// Loads the config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Parses the config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError`] if the text is not a valid config.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Clamps out-of-range values instead of rejecting them.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            child_count: self.child_count.max(1),
            ..self
        }
    }
}

/// Parameters of the single-level belt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeltConfig {
    /// Number of orbiting bodies. Clamped to >= 1.
    pub asteroid_count: usize,
    /// Base spin speed, degrees per second; each body scales it by a
    /// per-body random factor.
    pub angular_speed_deg: f32,
    /// Base orbit radius baked into each direction at creation.
    pub radius: f32,
}

impl Default for BeltConfig {
    fn default() -> Self {
        Self {
            asteroid_count: 4,
            angular_speed_deg: 80.0,
            radius: 4.0,
        }
    }
}

impl BeltConfig {
    /// Loads the config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Parses the config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError`] if the text is not a valid config.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Clamps out-of-range values instead of rejecting them.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            asteroid_count: self.asteroid_count.max(1),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_sample_scene() {
        let config = FieldConfig::default();
        assert_eq!(config.child_count, 150);
        assert_eq!(config.angular_speed_deg, 80.0);
        assert_eq!(config.radius, 15.0);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = FieldConfig::from_toml_str("child_count = 12").unwrap();
        assert_eq!(config.child_count, 12);
        assert_eq!(config.angular_speed_deg, 80.0);
    }

    #[test]
    fn test_zero_count_is_clamped_to_one() {
        let config = FieldConfig::from_toml_str("child_count = 0").unwrap();
        assert_eq!(config.child_count, 1);

        let belt = BeltConfig::from_toml_str("asteroid_count = 0").unwrap();
        assert_eq!(belt.asteroid_count, 1);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = FieldConfig::from_toml_str("child_count = \"many\"").unwrap_err();
        assert!(matches!(err, crate::ConfigError::Parse(_)));
    }
}
