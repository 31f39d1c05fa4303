use serde::{Deserialize, Serialize};

/// Storage key for the persisted autoplay flag.
pub const AUTOPLAY_KEY: &str = "mp_autoplay_enabled";

/// Player tuning, fixed per widget instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub autoplay_key: String,
    /// Arrow-key seek distance in seconds
    pub seek_step_secs: f64,
    /// Arrow-key volume change (volume range is 0.0-1.0)
    pub volume_step: f64,
    pub initial_volume: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autoplay_key: AUTOPLAY_KEY.to_string(),
            seek_step_secs: 5.0,
            volume_step: 0.05,
            initial_volume: 0.8,
        }
    }
}
