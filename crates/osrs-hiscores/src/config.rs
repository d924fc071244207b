//! Hiscores client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Official Old School hiscores root.
pub const DEFAULT_HISCORES_BASE_URL: &str = "https://secure.runescape.com/m=hiscore_oldschool";

/// Configuration for `HiscoresClient`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiscoresConfig {
    /// Hiscores root URL; the mode suffix is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. Default: 10.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_HISCORES_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for HiscoresConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl HiscoresConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
