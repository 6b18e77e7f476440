use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` block in index.html.
pub const CONFIG_ELEMENT_ID: &str = "wheel-config";

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Distance from the wheel center to each slot.
    pub radius_px: f64,
    /// Where index 0 sits when the wheel offset is 0 (-90 = top).
    pub start_angle_deg: f64,
    pub selected_scale: f64,
    pub transition_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius_px: 200.0,
            start_angle_deg: -90.0,
            selected_scale: 1.5,
            transition_ms: 600,
        }
    }
}

impl WheelConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    // Missing block -> defaults; broken block -> warn + defaults
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(cfg) => {
                    log::debug!("loaded wheel config {:?}", cfg);
                    cfg
                }
                Err(e) => {
                    log::warn!("{e}; using default wheel config");
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}
