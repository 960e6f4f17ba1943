//! Field configuration

use crate::error::ConfigError;
use field_core::{
    ParticleFactory, Theme, ThemeStyle, ValueRange, DEFAULT_EASE, DEFAULT_QUANTITY,
    DEFAULT_STATICITY,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles in every generation
    pub quantity: usize,
    /// Resistance to the pointer pull; 0 falls back to the default
    pub staticity: f32,
    /// Lag of the pointer follow; 0 falls back to the default
    pub ease: f32,
    /// Flipping this value regenerates the population
    pub refresh: bool,

    pub light: ThemeStyle,
    pub dark: ThemeStyle,

    /// Force a theme instead of following the host
    pub theme: Option<Theme>,
    /// Styling/identity pass-through, unused by the simulation
    pub class_name: Option<String>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            quantity: DEFAULT_QUANTITY,
            staticity: DEFAULT_STATICITY,
            ease: DEFAULT_EASE,
            refresh: false,
            light: ThemeStyle::light(),
            dark: ThemeStyle::dark(),
            theme: None,
            class_name: None,
        }
    }
}

impl FieldConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("staticity", self.staticity), ("ease", self.ease)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("expected a finite, non-negative number, got {value}"),
                ));
            }
        }

        for (field, range) in [
            ("light.size", self.light.size),
            ("light.target_alpha", self.light.target_alpha),
            ("dark.size", self.dark.size),
            ("dark.target_alpha", self.dark.target_alpha),
        ] {
            check_range(field, range)?;
        }

        for (field, range) in [
            ("light.target_alpha", self.light.target_alpha),
            ("dark.target_alpha", self.dark.target_alpha),
        ] {
            if range.max > 1.0 {
                return Err(ConfigError::invalid(field, "opacity cannot exceed 1.0"));
            }
        }

        Ok(())
    }

    /// Staticity with the divide-by-zero guard applied
    pub fn effective_staticity(&self) -> f32 {
        non_zero_or(self.staticity, DEFAULT_STATICITY)
    }

    /// Ease with the divide-by-zero guard applied
    pub fn effective_ease(&self) -> f32 {
        non_zero_or(self.ease, DEFAULT_EASE)
    }

    pub fn factory(&self) -> ParticleFactory {
        ParticleFactory::new(self.light, self.dark)
    }
}

fn non_zero_or(value: f32, default: f32) -> f32 {
    if value == 0.0 || !value.is_finite() {
        default
    } else {
        value
    }
}

fn check_range(field: &'static str, range: ValueRange) -> Result<(), ConfigError> {
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(ConfigError::invalid(field, "bounds must be finite"));
    }
    if range.min < 0.0 {
        return Err(ConfigError::invalid(field, "bounds must be non-negative"));
    }
    if range.min > range.max {
        return Err(ConfigError::invalid(
            field,
            format!("min {} is greater than max {}", range.min, range.max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FieldConfig::default();
        assert_eq!(config.quantity, 30);
        assert_eq!(config.staticity, 50.0);
        assert_eq!(config.ease, 50.0);
        assert!(!config.refresh);
    }

    #[test]
    fn test_zero_divisors_fall_back_to_defaults() {
        let config = FieldConfig {
            staticity: 0.0,
            ease: 0.0,
            ..Default::default()
        };
        assert_eq!(config.effective_staticity(), DEFAULT_STATICITY);
        assert_eq!(config.effective_ease(), DEFAULT_EASE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FieldConfig::from_json_str(r#"{ "quantity": 80, "ease": 20 }"#).unwrap();
        assert_eq!(config.quantity, 80);
        assert_eq!(config.ease, 20.0);
        assert_eq!(config.staticity, DEFAULT_STATICITY);
        assert_eq!(config.dark, ThemeStyle::dark());
    }

    #[test]
    fn test_theme_override_parses() {
        let config = FieldConfig::from_json_str(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(config.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_negative_ease_rejected() {
        let err = FieldConfig::from_json_str(r#"{ "ease": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ease", .. }));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = FieldConfig::from_json_str(
            r#"{ "light": { "size": { "min": 3, "max": 1 }, "target_alpha": { "min": 0.2, "max": 1 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "light.size", .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = FieldConfig::from_json_str("{ quantity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FieldConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
