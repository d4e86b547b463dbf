//! Colour palette for the annotation overlay
//!
//! Overlay elements refer to symbolic colour tokens which a stylesheet maps
//! to concrete values, so charts can be re-themed without touching layout.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping colour tokens to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Colour mappings: token name -> CSS colour
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Fallback for tokens that no palette defines
const FALLBACK_COLOR: &str = "#800080";

/// Default palette: purple due-date markers on a white label background
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"

[colors]
guide-line = "#800080"
leader-line = "#800080"
label-text = "#800080"
label-border = "#800080"
label-background = "rgba(255,255,255,0.9)"
axis = "#d3d3d3"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a colour token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a colour token, falling back to the default palette
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        default
            .resolve(token)
            .unwrap_or(FALLBACK_COLOR)
            .to_string()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.name.as_deref(), Some("default"));
        for token in ["guide-line", "leader-line", "label-text", "label-border", "axis"] {
            assert!(stylesheet.colors.contains_key(token), "missing {token}");
        }
    }

    #[test]
    fn test_resolve_missing_token() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        let empty = Stylesheet {
            name: None,
            description: None,
            colors: HashMap::new(),
        };
        assert_eq!(empty.resolve_or_default("axis"), "#d3d3d3");
        assert_eq!(empty.resolve_or_default("unknown-token"), FALLBACK_COLOR);
    }

    #[test]
    fn test_parse_toml_overrides() {
        let toml_str = r##"
[metadata]
name = "Teal"
description = "Teal markers"

[colors]
guide-line = "#008080"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Teal".to_string()));
        assert_eq!(stylesheet.description, Some("Teal markers".to_string()));
        assert_eq!(stylesheet.resolve_or_default("guide-line"), "#008080");
        assert_eq!(stylesheet.resolve_or_default("label-text"), "#800080");
    }

    #[test]
    fn test_colors_table_optional() {
        let stylesheet = Stylesheet::from_str("[metadata]\nname = \"bare\"\n").expect("Should parse");
        assert!(stylesheet.colors.is_empty());
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Stylesheet::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(StylesheetError::ParseError(_))));
    }
}
