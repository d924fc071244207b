//! HTTP client for the hiscores `index_lite.json` endpoint.
//!
//! Builds the mode-specific URL, performs one GET and decodes the body.
//! Any failure is reported as `HiscoresError::Fetch` for the requested player.

use crate::config::HiscoresConfig;
use crate::error::{HiscoresError, HiscoresResult};
use crate::types::RawHiscores;
use osrs_core::{DynTransport, GameMode, JsonRequest, ReqwestTransport, TransportError};
use osrs_telemetry::Metrics;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Client for the hiscores JSON API.
pub struct HiscoresClient {
    /// Hiscores root URL without trailing slash.
    base_url: String,
    transport: DynTransport,
}

impl HiscoresClient {
    /// Create a client backed by `reqwest` with the configured timeout.
    pub fn new(config: &HiscoresConfig) -> HiscoresResult<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(&config.base_url, Arc::new(transport)))
    }

    /// Create a client on top of an existing transport.
    pub fn with_transport(base_url: impl Into<String>, transport: DynTransport) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `index_lite.json` URL for a mode.
    pub fn endpoint(&self, mode: GameMode) -> String {
        format!("{}{}/index_lite.json", self.base_url, mode.suffix())
    }

    /// Fetch the raw hiscores document for `username`.
    pub async fn fetch(&self, username: &str, mode: GameMode) -> HiscoresResult<RawHiscores> {
        let url = self.endpoint(mode);
        info!(username, %mode, url = %url, "Fetching hiscores");

        let request = JsonRequest::get(&url).query("player", username);
        let started = Instant::now();
        let result = match self.transport.get_json(request).await {
            Ok(body) => serde_json::from_value::<RawHiscores>(body).map_err(TransportError::from),
            Err(e) => Err(e),
        };
        Metrics::http_request(
            "hiscores",
            result.is_ok(),
            started.elapsed().as_secs_f64() * 1000.0,
        );

        let raw = result.map_err(|source| {
            warn!(username, error = %source, "Hiscores fetch failed");
            HiscoresError::Fetch {
                username: username.to_string(),
                source,
            }
        })?;

        debug!(
            username,
            skills = raw.skills.len(),
            activities = raw.activities.len(),
            "Hiscores fetched"
        );
        if raw.is_empty() {
            warn!(username, %mode, "Hiscores document has no rows");
        }
        Ok(raw)
    }
}
