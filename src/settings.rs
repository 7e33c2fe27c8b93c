//! Runtime settings
//!
//! Read once at startup: from an inline JSON `<script>` element on the web,
//! from the `FROGGER_SETTINGS` environment variable on native. Nothing is
//! written back.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Clock period in milliseconds
    pub tick_interval_ms: u32,
    /// `log` level filter name ("error" through "trace")
    pub log_level: String,
    /// Start with the autopilot playing
    pub autopilot: bool,
    /// Ticks between autopilot moves
    pub autopilot_move_every: u32,
    /// Length of a native demo session
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            log_level: "info".to_string(),
            autopilot: false,
            autopilot_move_every: 20,
            demo_ticks: 6000,
        }
    }
}

impl Settings {
    /// Element id of the inline settings block
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "frogger-settings";
    /// Environment variable read on native
    #[cfg(not(target_arch = "wasm32"))]
    const ENV_VAR: &'static str = "FROGGER_SETTINGS";

    /// Parse settings; absent fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parsed log level, `Info` if unrecognized
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn from_source(source: Option<String>) -> Self {
        match source {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid settings: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());
        Self::from_source(json)
    }

    /// Load settings from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_source(std::env::var(Self::ENV_VAR).ok())
    }
}
