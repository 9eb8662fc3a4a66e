//! Display settings
//!
//! Currency display configuration consumed read-only by the display layer.
//! The price calculator itself works in abstract numeric units.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RentdeskError, Result, settings_parse_failed};

fn default_symbol() -> String {
    "$".to_string()
}

fn default_code() -> String {
    "USD".to_string()
}

/// Currency symbol and ISO code used when rendering prices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_code")]
    pub code: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            symbol: default_symbol(),
            code: default_code(),
        }
    }
}

impl CurrencySettings {
    /// Default settings location under the user config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rentdesk")
            .join("settings.yaml")
    }

    /// Parse settings from YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| settings_parse_failed("unknown", e.to_string()))
    }

    /// Load settings. An explicit path must exist and parse; the default
    /// path falls back to defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(RentdeskError::SettingsNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::read_from(path)
            }
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::read_from(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| settings_parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Render a whole-unit amount, e.g. `$82`
    pub fn format(&self, amount: u64) -> String {
        format!("{}{}", self.symbol, amount)
    }

    /// Render a fractional amount with two decimals, e.g. `$81.60`
    pub fn format_exact(&self, amount: f64) -> String {
        format!("{}{:.2}", self.symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CurrencySettings::default();
        assert_eq!(settings.symbol, "$");
        assert_eq!(settings.code, "USD");
    }

    #[test]
    fn test_from_yaml() {
        let settings = CurrencySettings::from_yaml("symbol: \"€\"\ncode: EUR\n").unwrap();
        assert_eq!(settings.symbol, "€");
        assert_eq!(settings.code, "EUR");
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let settings = CurrencySettings::from_yaml("code: GBP\n").unwrap();
        assert_eq!(settings.symbol, "$");
        assert_eq!(settings.code, "GBP");
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = CurrencySettings::from_yaml("symbol: [oops").unwrap_err();
        assert!(matches!(err, RentdeskError::SettingsParseFailed { .. }));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let err = CurrencySettings::load(Some(Path::new("/nonexistent/settings.yaml"))).unwrap_err();
        assert!(matches!(err, RentdeskError::SettingsNotFound { .. }));
    }

    #[test]
    fn test_format() {
        let settings = CurrencySettings::default();
        assert_eq!(settings.format(82), "$82");
        assert_eq!(settings.format_exact(81.6), "$81.60");
    }
}
