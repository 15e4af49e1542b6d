//! Widget configuration.
//!
//! Chosen per deployment, not per tile. Every field has a default so an empty
//! object (or no config at all) yields a working 12-column grid board.

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::{Result, WidgetError};
use crate::layout::LayoutStrategy;

/// Label used by grid boards when a row has no `Label`
pub const GRID_LABEL_DEFAULT: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub layout: LayoutStrategy,
    /// Honor `Type`/`Pages` columns and render menu tiles
    pub menu_support: bool,
    /// Overrides the layout-dependent label fallback
    pub label_default: Option<String>,
    /// Spacing between tiles, in pixels
    pub gap_px: u32,
    pub show_version_tag: bool,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            layout: LayoutStrategy::default(),
            menu_support: true,
            label_default: None,
            gap_px: 8,
            show_version_tag: true,
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| WidgetError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Decode a config object handed over from JavaScript.
    ///
    /// `undefined`/`null` yields the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| WidgetError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.level()?;
        self.layout.validate()
    }

    /// Label substituted for rows without one
    pub fn label_default(&self) -> &str {
        match (&self.label_default, &self.layout) {
            (Some(label), _) => label,
            (None, LayoutStrategy::Grid { .. }) => GRID_LABEL_DEFAULT,
            (None, LayoutStrategy::Absolute { .. }) => "",
        }
    }

    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| WidgetError::Config(format!("unknown log level {:?}", self.log_level)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.label_default(), "Untitled");
    }

    #[test]
    fn test_absolute_layout_defaults_to_blank_label() {
        let config = WidgetConfig::from_json(r#"{"layout": {"kind": "absolute"}}"#).unwrap();
        assert_eq!(config.layout, LayoutStrategy::Absolute { unit_px: 60 });
        assert_eq!(config.label_default(), "");
    }

    #[test]
    fn test_explicit_label_default_wins() {
        let config = WidgetConfig::from_json(r#"{"labelDefault": "-"}"#).unwrap();
        assert_eq!(config.label_default(), "-");
    }

    #[test]
    fn test_rejects_bad_level() {
        let err = WidgetConfig::from_json(r#"{"logLevel": "loud"}"#).unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            WidgetConfig::from_json("{layout"),
            Err(WidgetError::Config(_))
        ));
    }
}
