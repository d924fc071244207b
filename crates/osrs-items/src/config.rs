//! Item catalog configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// OSRS Wiki real-time prices API root.
pub const DEFAULT_ITEMS_BASE_URL: &str = "https://prices.runescape.wiki/api/v1/osrs";

/// User-Agent sent when none is configured. The Wiki asks API users to
/// identify themselves.
pub const DEFAULT_USER_AGENT: &str = "osrs_info";

/// Configuration for `ItemsClient`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsConfig {
    /// Prices API root; `/mapping` and `/latest` are appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. Default: 10.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Query shorthands, e.g. `"bgs" = "Bandos godsword"`.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_ITEMS_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            aliases: HashMap::new(),
        }
    }
}

impl ItemsConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
