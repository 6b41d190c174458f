use serde::Deserialize;
use tracing::Level;
use wasm_bindgen::JsCast;

use crate::core::error::{BoardError, Result};
use crate::core::services::color::ColorScheme;
use crate::core::services::drag::DEFAULT_ACTIVATION_DISTANCE;

const CONFIG_META_NAME: &str = "kanban-config";

/// Board settings, read from `<meta name="kanban-config" content="{...}">`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub drag_activation_distance: f64,
    pub toast_duration_ms: u32,
    pub color_saturation: u8,
    pub color_lightness: u8,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            drag_activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            toast_duration_ms: 3000,
            color_saturation: 70,
            color_lightness: 80,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig =
            serde_json::from_str(json).map_err(|e| BoardError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config meta tag. A page without one gets the defaults.
    pub fn from_document() -> Result<Self> {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{}\"]", CONFIG_META_NAME))
                    .ok()
                    .flatten()
            })
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content());

        match content {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.drag_activation_distance.is_finite() || self.drag_activation_distance < 0.0 {
            return Err(BoardError::InvalidConfig(format!(
                "drag_activation_distance must be a non-negative number, got {}",
                self.drag_activation_distance
            )));
        }
        if self.color_saturation > 100 || self.color_lightness > 100 {
            return Err(BoardError::InvalidConfig(
                "color saturation and lightness are percentages".to_string(),
            ));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| BoardError::InvalidConfig(format!("unknown log level: {}", self.log_level)))
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme {
            saturation: self.color_saturation,
            lightness: self.color_lightness,
        }
    }
}
