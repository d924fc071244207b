//! Decoder facade.
//!
//! Owns one hiscores API and one item catalog built from a shared
//! configuration. Hiscores calls take `&self`; catalog calls take `&mut self`
//! because they may refresh the caches.

use crate::config::DecoderConfig;
use crate::error::AppResult;
use osrs_core::{DynTransport, ModeFlags, ReqwestTransport};
use osrs_hiscores::{GetOptions, HiscoresApi, HiscoresClient, PlayerHiscores, StatsSnapshot};
use osrs_items::{ItemQuery, ItemsClient, PricedItem};
use std::sync::Arc;
use tracing::info;

/// Entry point for hiscores and item price lookups.
pub struct Decoder {
    config: DecoderConfig,
    hiscores: HiscoresApi,
    items: ItemsClient,
}

impl Decoder {
    /// Create a decoder backed by `reqwest`.
    pub fn new(config: DecoderConfig) -> AppResult<Self> {
        let hiscores = HiscoresApi::new(HiscoresClient::new(&config.hiscores)?);
        let items = ItemsClient::new(&config.items)?;

        info!(
            hiscores_url = %config.hiscores.base_url,
            items_url = %config.items.base_url,
            "Decoder initialized"
        );

        Ok(Self {
            config,
            hiscores,
            items,
        })
    }

    /// Create a decoder with the built-in defaults.
    pub fn default_config() -> AppResult<Self> {
        Self::new(DecoderConfig::default())
    }

    /// Create a decoder whose clients share `transport`.
    ///
    /// Timeouts in `config` are ignored; the transport owns them.
    pub fn with_transport(config: DecoderConfig, transport: DynTransport) -> Self {
        let hiscores = HiscoresApi::new(HiscoresClient::with_transport(
            &config.hiscores.base_url,
            transport.clone(),
        ));
        let items = ItemsClient::with_transport(&config.items.base_url, &config.items.user_agent, transport)
            .with_aliases(config.items.aliases.clone());

        Self {
            config,
            hiscores,
            items,
        }
    }

    /// Create a decoder on one shared `reqwest` client.
    ///
    /// Uses the hiscores timeout for both APIs.
    pub fn shared(config: DecoderConfig) -> AppResult<Self> {
        let transport = ReqwestTransport::new(config.hiscores.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn hiscores(&self) -> &HiscoresApi {
        &self.hiscores
    }

    pub fn items(&self) -> &ItemsClient {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut ItemsClient {
        &mut self.items
    }

    /// Fetch and/or parse a player's hiscores.
    pub async fn player(&self, username: &str, options: GetOptions) -> AppResult<PlayerHiscores> {
        Ok(self.hiscores.get(username, options).await?)
    }

    /// Fetch and classify a player's hiscores in one call.
    pub async fn player_snapshot(
        &self,
        username: &str,
        modes: ModeFlags,
    ) -> AppResult<StatsSnapshot> {
        Ok(self.hiscores.snapshot(username, modes).await?)
    }

    /// Price of a tradeable item given by id or exact name.
    pub async fn price(&mut self, query: impl Into<ItemQuery>) -> AppResult<PricedItem> {
        let id = match query.into() {
            ItemQuery::Id(id) => id,
            name => self.items.lookup(name).await?.id,
        };
        Ok(self.items.price(id).await?)
    }
}
