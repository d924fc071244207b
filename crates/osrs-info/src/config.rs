//! Configuration for the decoder and CLI.
//!
//! Every section and field is optional in the TOML file; missing values take
//! the built-in defaults.
//!
//! ```toml
//! [hiscores]
//! timeout_secs = 5
//!
//! [items]
//! user_agent = "my-tool (contact@example.com)"
//!
//! [items.aliases]
//! bgs = "Bandos godsword"
//! ```

use crate::error::{AppError, AppResult};
use osrs_hiscores::HiscoresConfig;
use osrs_items::ItemsConfig;
use serde::{Deserialize, Serialize};

/// Decoder configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecoderConfig {
    #[serde(default)]
    pub hiscores: HiscoresConfig,
    #[serde(default)]
    pub items: ItemsConfig,
}

impl DecoderConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config '{path}': {e}")))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}
