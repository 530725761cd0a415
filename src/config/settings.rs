use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://www.dragonsofmugloar.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,

    // Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Zero is not a usable timeout and falls back to the default.
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn game_url(&self) -> String {
        format!("{}/api/game", self.base())
    }

    pub fn specific_game_url(&self, game_id: u64) -> String {
        format!("{}/{}", self.game_url(), game_id)
    }

    pub fn weather_url(&self, game_id: u64) -> String {
        format!("{}/weather/api/report/{}", self.base(), game_id)
    }

    pub fn solution_url(&self, game_id: u64) -> String {
        format!("{}/solution", self.specific_game_url(game_id))
    }
}
