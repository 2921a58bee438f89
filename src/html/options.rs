//! Paste options and their TOML configuration
//!
//! ```toml
//! [paste]
//! filter_style = true
//! ignore_img = false
//! ```

use std::fs;
use log::debug;
use crate::rtf::errors::{PasteError, PasteResult};

/// How pasted HTML is filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteOptions {
    /// Remove `style` attributes as well as `class`
    pub filter_style: bool,
    /// Drop every `<img>` tag instead of recovering Word images
    pub ignore_img: bool,
}

impl Default for PasteOptions {
    fn default() -> Self {
        PasteOptions {
            filter_style: true,
            ignore_img: false,
        }
    }
}

impl PasteOptions {
    /// Parse options from a TOML string
    ///
    /// Missing keys keep their defaults; keys of the wrong type are an error.
    pub fn from_str(content: &str) -> PasteResult<Self> {
        let toml_value: toml::Table = content.parse()
            .map_err(|e| PasteError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut options = PasteOptions::default();

        if let Some(table) = toml_value.get("paste") {
            let table = table.as_table()
                .ok_or_else(|| PasteError::ConfigError("[paste] must be a table".to_string()))?;

            if let Some(value) = Self::read_bool(table, "filter_style")? {
                options.filter_style = value;
            }
            if let Some(value) = Self::read_bool(table, "ignore_img")? {
                options.ignore_img = value;
            }
        }

        debug!("Loaded paste options: {:?}", options);
        Ok(options)
    }

    /// Load options from a TOML file
    pub fn from_file(path: &str) -> PasteResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    fn read_bool(table: &toml::Table, key: &str) -> PasteResult<Option<bool>> {
        match table.get(key) {
            None => Ok(None),
            Some(v) => v.as_bool()
                .map(Some)
                .ok_or_else(|| PasteError::ConfigError(format!("paste.{} must be a boolean", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PasteOptions::default();
        assert!(options.filter_style);
        assert!(!options.ignore_img);
        assert_eq!(PasteOptions::from_str("").unwrap(), options);
    }

    #[test]
    fn test_partial_table() {
        let options = PasteOptions::from_str("[paste]\nignore_img = true\n").unwrap();
        assert!(options.filter_style);
        assert!(options.ignore_img);
    }

    #[test]
    fn test_wrong_type() {
        let result = PasteOptions::from_str("[paste]\nfilter_style = \"yes\"\n");
        assert!(matches!(result, Err(PasteError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(PasteOptions::from_str("[paste").is_err());
    }
}
