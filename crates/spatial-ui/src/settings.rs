//! Spacing and sizing configuration
//!
//! Settings are plain data. They can be built in code or loaded from TOML,
//! where any key left out keeps its default:
//!
//! ```toml
//! margin = 0.012
//! depth = 0.015
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating [`UiSettings`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid setting '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Global style and spacing, in meters unless noted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Space between a window's edge and its content
    pub margin: f32,
    /// Space between an element's edge and its content
    pub padding: f32,
    /// Space between neighbouring elements
    pub gutter: f32,
    /// Depth of pressable elements, and their full press travel
    pub depth: f32,
    /// Corner radius of element visuals
    pub rounding: f32,
    /// Depth of backplates as a fraction of `depth`
    pub backplate_depth: f32,
    /// Width of the border around backplates
    pub backplate_border: f32,
    /// Character height used for line heights and text measurement
    pub text_height: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            margin: 0.010,
            padding: 0.010,
            gutter: 0.010,
            depth: 0.010,
            rounding: 0.0075,
            backplate_depth: 0.4,
            backplate_border: 0.0005,
            text_height: 0.0125,
        }
    }
}

impl UiSettings {
    /// Parse settings from TOML text and validate them
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// All lengths must be finite and non-negative, and depth must be
    /// positive since press travel divides by it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("margin", self.margin),
            ("padding", self.padding),
            ("gutter", self.gutter),
            ("depth", self.depth),
            ("rounding", self.rounding),
            ("backplate_depth", self.backplate_depth),
            ("backplate_border", self.backplate_border),
            ("text_height", self.text_height),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a finite, non-negative length, got {}", value),
                });
            }
        }
        if self.depth <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "depth",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Height of a single line of content: text plus padding on both sides
    pub fn line_height(&self) -> f32 {
        self.padding * 2.0 + self.text_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = UiSettings::from_toml_str("margin = 0.02\ndepth = 0.015\n").unwrap();
        assert_eq!(settings.margin, 0.02);
        assert_eq!(settings.depth, 0.015);
        assert_eq!(settings.padding, UiSettings::default().padding);
    }

    #[test]
    fn test_rejects_negative() {
        let err = UiSettings::from_toml_str("gutter = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "gutter", .. }));
    }

    #[test]
    fn test_rejects_zero_depth() {
        let err = UiSettings::from_toml_str("depth = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "depth", .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = UiSettings::from_toml_str("margin = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "padding = 0.004").unwrap();
        let settings = UiSettings::load(file.path()).unwrap();
        assert_eq!(settings.padding, 0.004);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = UiSettings::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_line_height() {
        let s = UiSettings::default();
        assert!((s.line_height() - 0.0325).abs() < 1e-6);
    }
}
