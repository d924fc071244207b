//! Client for the OSRS Wiki prices API.
//!
//! Two endpoints are cached independently:
//! - `/mapping`: static metadata for every item
//! - `/latest`: latest high/low price per item id
//!
//! Each cache is fetched on first use and again only when a caller asks for a
//! refresh or after `invalidate`. Lookups and searches only see tradeable
//! items (see `search`).

use crate::cache::{CacheCell, CacheState};
use crate::config::ItemsConfig;
use crate::error::{ItemsError, ItemsResult};
use crate::fuzzy::FuzzyMatcher;
use crate::search::{FuzzyOptions, SearchEngine, SearchOptions};
use crate::types::{ItemMeta, ItemQuery, LatestResponse, PriceQuote, PricedItem};
use osrs_core::{DynTransport, JsonRequest, ReqwestTransport, TransportError};
use osrs_telemetry::Metrics;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

const MAPPING: &str = "mapping";
const LATEST: &str = "latest";

#[cfg(feature = "fuzzy")]
fn default_matcher() -> Option<Arc<dyn FuzzyMatcher>> {
    Some(Arc::new(crate::fuzzy::StrsimMatcher::new()))
}

#[cfg(not(feature = "fuzzy"))]
fn default_matcher() -> Option<Arc<dyn FuzzyMatcher>> {
    None
}

/// Item catalog backed by the prices API.
pub struct ItemsClient {
    /// API root without trailing slash.
    base_url: String,
    user_agent: String,
    transport: DynTransport,
    /// Keys are trimmed and lowercased.
    aliases: HashMap<String, String>,
    matcher: Option<Arc<dyn FuzzyMatcher>>,
    mapping: CacheCell<Vec<ItemMeta>>,
    latest: CacheCell<HashMap<u32, PriceQuote>>,
}

impl ItemsClient {
    /// Create a client backed by `reqwest` from configuration.
    pub fn new(config: &ItemsConfig) -> ItemsResult<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(
            Self::with_transport(&config.base_url, &config.user_agent, Arc::new(transport))
                .with_aliases(config.aliases.clone()),
        )
    }

    /// Create a client on top of an existing transport.
    pub fn with_transport(
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
        transport: DynTransport,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
            transport,
            aliases: HashMap::new(),
            matcher: default_matcher(),
            mapping: CacheCell::new(),
            latest: CacheCell::new(),
        }
    }

    /// Replace the alias table.
    pub fn with_aliases(mut self, aliases: HashMap<String, String>) -> Self {
        self.aliases = aliases
            .into_iter()
            .map(|(key, value)| (key.trim().to_lowercase(), value))
            .collect();
        self
    }

    /// Install a fuzzy matcher.
    pub fn with_matcher(mut self, matcher: Arc<dyn FuzzyMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Remove the fuzzy matcher; fuzzy search then fails with
    /// `MissingCapability`.
    pub fn without_matcher(mut self) -> Self {
        self.matcher = None;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn aliases(&self) -> &HashMap<String, String> {
        &self.aliases
    }

    pub fn has_matcher(&self) -> bool {
        self.matcher.is_some()
    }

    pub fn mapping_cache(&self) -> &CacheCell<Vec<ItemMeta>> {
        &self.mapping
    }

    pub fn latest_cache(&self) -> &CacheCell<HashMap<u32, PriceQuote>> {
        &self.latest
    }

    /// Full, unfiltered item metadata.
    pub async fn mapping(&mut self, refresh: bool) -> ItemsResult<&[ItemMeta]> {
        self.load_mapping(refresh).await?;
        Ok(self.mapping.get().as_slice())
    }

    /// Latest prices keyed by item id.
    pub async fn latest_index(&mut self, refresh: bool) -> ItemsResult<&HashMap<u32, PriceQuote>> {
        self.load_latest(refresh).await?;
        Ok(self.latest.get())
    }

    /// Metadata rows that have a latest price, in catalog order.
    pub async fn tradeable_mapping(&mut self, refresh: bool) -> ItemsResult<Vec<&ItemMeta>> {
        self.load_all(refresh).await?;
        Ok(self.engine().tradeable())
    }

    /// Mark both caches stale. Cached values are still served until a refetch
    /// succeeds.
    pub fn invalidate(&mut self) {
        self.mapping.invalidate();
        self.latest.invalidate();
        info!("Item caches invalidated");
    }

    /// Find a tradeable item by id or exact name.
    pub async fn lookup(&mut self, query: impl Into<ItemQuery>) -> ItemsResult<&ItemMeta> {
        let query = query.into();
        self.load_all(false).await?;
        self.engine().lookup(&query)
    }

    /// Substring search over tradeable item names.
    pub async fn search(
        &mut self,
        query: &str,
        options: SearchOptions,
    ) -> ItemsResult<Vec<&ItemMeta>> {
        self.load_all(false).await?;
        self.engine().search(query, &options)
    }

    /// Fuzzy search over tradeable item names.
    pub async fn fuzzy_search(
        &mut self,
        query: &str,
        options: FuzzyOptions,
    ) -> ItemsResult<Vec<&ItemMeta>> {
        if self.matcher.is_none() {
            return self.engine().fuzzy_search(query, &options);
        }
        self.load_all(false).await?;
        self.engine().fuzzy_search(query, &options)
    }

    /// Latest price for an item id.
    pub async fn latest(&mut self, id: u32) -> ItemsResult<PriceQuote> {
        self.load_latest(false).await?;
        self.engine().latest(id).copied()
    }

    /// Metadata and latest price of a tradeable item.
    pub async fn price(&mut self, id: u32) -> ItemsResult<PricedItem> {
        self.load_all(false).await?;
        self.engine().price(id)
    }

    fn engine(&self) -> SearchEngine<'_> {
        SearchEngine::new(
            self.mapping.get(),
            self.latest.get(),
            &self.aliases,
            self.matcher.as_deref(),
        )
    }

    async fn load_all(&mut self, refresh: bool) -> ItemsResult<()> {
        self.load_mapping(refresh).await?;
        self.load_latest(refresh).await
    }

    async fn load_mapping(&mut self, refresh: bool) -> ItemsResult<()> {
        if !self.mapping.needs_fetch(refresh) {
            Metrics::cache_access(MAPPING, "hit");
            debug!(items = self.mapping.get().len(), "Mapping cache hit");
            return Ok(());
        }
        Metrics::cache_access(MAPPING, access_label(self.mapping.state(), refresh));

        let rows: Vec<Value> = self.fetch(MAPPING).await?;
        let items = index_mapping(rows);
        info!(items = items.len(), "Item mapping cached");
        self.mapping.replace(items);
        Ok(())
    }

    async fn load_latest(&mut self, refresh: bool) -> ItemsResult<()> {
        if !self.latest.needs_fetch(refresh) {
            Metrics::cache_access(LATEST, "hit");
            debug!(prices = self.latest.get().len(), "Latest price cache hit");
            return Ok(());
        }
        Metrics::cache_access(LATEST, access_label(self.latest.state(), refresh));

        let body: LatestResponse = self.fetch(LATEST).await?;
        let prices = index_prices(body.data.unwrap_or_default());
        info!(prices = prices.len(), "Latest prices cached");
        self.latest.replace(prices);
        Ok(())
    }

    /// GET `{base_url}/{endpoint}` and decode the body.
    async fn fetch<T: DeserializeOwned>(&self, endpoint: &'static str) -> ItemsResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        info!(url = %url, "Fetching item data");

        let request = JsonRequest::get(&url).header("User-Agent", &self.user_agent);
        let started = Instant::now();
        let result = match self.transport.get_json(request).await {
            Ok(body) => serde_json::from_value::<T>(body).map_err(TransportError::from),
            Err(e) => Err(e),
        };
        Metrics::http_request(
            endpoint,
            result.is_ok(),
            started.elapsed().as_secs_f64() * 1000.0,
        );

        result.map_err(|source| {
            warn!(url = %url, error = %source, "Item data fetch failed");
            ItemsError::Fetch { url, source }
        })
    }
}

fn access_label(state: CacheState, refresh: bool) -> &'static str {
    match (refresh, state) {
        (true, _) => "refresh",
        (false, CacheState::Stale) => "stale",
        (false, _) => "miss",
    }
}

/// Decode `/mapping` rows, skipping any without a usable id.
fn index_mapping(rows: Vec<Value>) -> Vec<ItemMeta> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.get("id").cloned();
            match serde_json::from_value::<ItemMeta>(row) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(id = ?id, error = %e, "Skipping malformed mapping row");
                    None
                }
            }
        })
        .collect()
}

/// Re-key `/latest` data by numeric item id.
fn index_prices(data: HashMap<String, PriceQuote>) -> HashMap<u32, PriceQuote> {
    data.into_iter()
        .filter_map(|(key, quote)| match key.parse::<u32>() {
            Ok(id) => Some((id, quote)),
            Err(_) => {
                warn!(key = %key, "Skipping price entry with non-numeric item id");
                None
            }
        })
        .collect()
}
