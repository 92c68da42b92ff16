//! Player preferences
//!
//! Persisted as JSON separately from the run history.

use serde::{Deserialize, Serialize};

use crate::persistence::{SETTINGS_KEY, Storage};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all sound effects
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults on missing or corrupt data
    pub fn load(storage: &impl Storage) -> Self {
        match storage.load(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings.clamped();
                }
                Err(e) => log::warn!("Ignoring corrupt settings: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::warn!("{e}"),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings; failures are logged and ignored
    pub fn save(&self, storage: &mut impl Storage) {
        match serde_json::to_string(self) {
            Ok(json) => match storage.save(SETTINGS_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("{e}"),
            },
            Err(e) => log::warn!("Could not serialize settings: {e}"),
        }
    }

    /// Volumes forced into 0.0 - 1.0
    pub fn clamped(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }
}
