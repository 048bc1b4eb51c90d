use serde::{
    Deserialize,
    Serialize,
};

use crate::game::Difficulty;

pub const SETTINGS_FILE: &str = "settings.json";
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub zoom: f32,
    pub default_difficulty: Difficulty,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true, zoom: 1.0, default_difficulty: Difficulty::Easy }
    }
}

impl SettingsData {
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}
