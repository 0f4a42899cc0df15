//! Page Configuration
//!
//! Optional JSON embedded in the host page:
//! `<script type="application/json" id="app-config">{ ... }</script>`

use leptos_slide::{ConfigError, SlideConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{default_items, Item};

/// Id of the script element holding the configuration
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Slide(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub slide: SlideConfig,
    /// Fade duration of the delete prompt
    pub prompt_ms: u32,
    pub prompt_title: String,
    pub items: Vec<Item>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            slide: SlideConfig::default(),
            prompt_ms: 200,
            prompt_title: "Delete this item?".to_string(),
            items: default_items(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.slide.validate()?;
        Ok(config)
    }

    /// Read the page configuration, falling back to defaults
    pub fn load() -> Self {
        let Some(json) = config_text() else {
            log::debug!("[CONFIG] No #{} element, using defaults", CONFIG_ELEMENT_ID);
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("[CONFIG] Loaded {} items", config.items.len());
                config
            }
            Err(err) => {
                log::warn!("[CONFIG] {}; using defaults", err);
                Self::default()
            }
        }
    }
}

fn config_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}
