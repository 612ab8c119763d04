//! Widget configuration
//!
//! Every field has a default matching the shipped page, so the page can pass
//! `undefined`, `{}` or only the fields it wants to override.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

pub const DEFAULT_REVERT_DELAY_MS: u32 = 1200;
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 600.0;
pub const DEFAULT_IDLE_LABEL: &str = "Copiar";
pub const DEFAULT_CONFIRMED_LABEL: &str = "Copiado";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid config object: {0}")]
    InvalidValue(String),

    #[error("Invalid config field `{field}`: {message}")]
    InvalidField { field: &'static str, message: String },
}

/// Tunables for the copy widget and the scroll-triggered control
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Time the confirmation label stays visible after the latest success
    pub revert_delay_ms: u32,

    /// Control label while idle
    pub idle_label: String,

    /// Control label while confirmed
    pub confirmed_label: String,

    /// Scroll offset that must be strictly exceeded to show the back-to-top control
    pub scroll_threshold: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            revert_delay_ms: DEFAULT_REVERT_DELAY_MS,
            idle_label: DEFAULT_IDLE_LABEL.to_string(),
            confirmed_label: DEFAULT_CONFIRMED_LABEL.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config from a JS object; `undefined`/`null` yield the defaults
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        let config: WidgetConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.revert_delay_ms == 0 {
            return Err(ConfigError::InvalidField {
                field: "revertDelayMs",
                message: "must be greater than zero".to_string(),
            });
        }

        if self.idle_label.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "idleLabel",
                message: "must not be empty".to_string(),
            });
        }

        if self.confirmed_label.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "confirmedLabel",
                message: "must not be empty".to_string(),
            });
        }

        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(ConfigError::InvalidField {
                field: "scrollThreshold",
                message: format!("must be a non-negative number, got {}", self.scroll_threshold),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let config = WidgetConfig::default();
        assert_eq!(config.revert_delay_ms, 1200);
        assert_eq!(config.idle_label, "Copiar");
        assert_eq!(config.confirmed_label, "Copiado");
        assert_eq!(config.scroll_threshold, 600.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{"revertDelayMs": 2000, "confirmedLabel": "Copied!"}"#)
            .expect("partial config should load");
        assert_eq!(config.revert_delay_ms, 2000);
        assert_eq!(config.confirmed_label, "Copied!");
        assert_eq!(config.idle_label, "Copiar");
    }

    #[test]
    fn test_rejects_zero_delay() {
        let err = WidgetConfig::from_json(r#"{"revertDelayMs": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { field: "revertDelayMs", .. }));
    }

    #[test]
    fn test_rejects_blank_label() {
        let err = WidgetConfig::from_json(r#"{"idleLabel": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { field: "idleLabel", .. }));
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let err = WidgetConfig::from_json(r#"{"scrollThreshold": -1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { field: "scrollThreshold", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = WidgetConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }
}
