//! Item lookup and search over the tradeable subset of the catalog.
//!
//! An item is tradeable when its id has an entry in the latest price map.
//! The subset is derived on every call from the two cached datasets and is
//! never stored.

use crate::error::{ItemsError, ItemsResult};
use crate::fuzzy::{FuzzyMatcher, Scorer};
use crate::types::{ItemMeta, ItemQuery, PriceQuote, PricedItem};
use std::collections::HashMap;
use tracing::debug;

/// Default result count for fuzzy search.
pub const DEFAULT_FUZZY_LIMIT: usize = 10;

/// Default minimum fuzzy score (0-100).
pub const DEFAULT_SCORE_CUTOFF: f64 = 60.0;

/// Options for substring search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Maximum number of results; `None` or 0 returns every hit.
    pub limit: Option<usize>,
    /// Fall back to fuzzy matching when there are no substring hits.
    pub fuzzy: bool,
    /// Minimum score for the fuzzy fallback.
    pub score_cutoff: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: None,
            fuzzy: false,
            score_cutoff: DEFAULT_SCORE_CUTOFF,
        }
    }
}

impl SearchOptions {
    pub fn limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn fuzzy(mut self) -> Self {
        self.fuzzy = true;
        self
    }
}

/// Options for fuzzy search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyOptions {
    /// Maximum number of results; 0 returns every match.
    pub limit: usize,
    pub score_cutoff: f64,
    pub scorer: Scorer,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FUZZY_LIMIT,
            score_cutoff: DEFAULT_SCORE_CUTOFF,
            scorer: Scorer::WRatio,
        }
    }
}

/// Replace `query` with its alias, if one is registered.
///
/// The alias key is the trimmed, lowercased query; unknown queries pass
/// through unchanged.
pub fn apply_alias<'a>(aliases: &'a HashMap<String, String>, query: &'a str) -> &'a str {
    aliases
        .get(&query.trim().to_lowercase())
        .map(String::as_str)
        .unwrap_or(query)
}

/// Borrowed view over the catalog used to answer queries.
#[derive(Clone, Copy)]
pub struct SearchEngine<'a> {
    mapping: &'a [ItemMeta],
    prices: &'a HashMap<u32, PriceQuote>,
    aliases: &'a HashMap<String, String>,
    matcher: Option<&'a dyn FuzzyMatcher>,
}

impl<'a> SearchEngine<'a> {
    pub fn new(
        mapping: &'a [ItemMeta],
        prices: &'a HashMap<u32, PriceQuote>,
        aliases: &'a HashMap<String, String>,
        matcher: Option<&'a dyn FuzzyMatcher>,
    ) -> Self {
        Self {
            mapping,
            prices,
            aliases,
            matcher,
        }
    }

    /// Metadata rows that have a price entry, in catalog order.
    pub fn tradeable(&self) -> Vec<&'a ItemMeta> {
        let prices = self.prices;
        self.mapping
            .iter()
            .filter(|item| prices.contains_key(&item.id))
            .collect()
    }

    /// Find one tradeable item by id or by exact (case-insensitive) name.
    pub fn lookup(&self, query: &ItemQuery) -> ItemsResult<&'a ItemMeta> {
        match query {
            ItemQuery::Id(id) => {
                if !self.prices.contains_key(id) {
                    return Err(not_found(query, "tradeable item"));
                }
                self.tradeable()
                    .into_iter()
                    .find(|item| item.id == *id)
                    .ok_or_else(|| not_found(query, "item"))
            }
            ItemQuery::Name(name) => {
                let wanted = apply_alias(self.aliases, name).trim().to_lowercase();
                self.tradeable()
                    .into_iter()
                    .find(|item| item.name.to_lowercase() == wanted)
                    .ok_or_else(|| not_found(query, "tradeable item"))
            }
        }
    }

    /// Case-insensitive substring search, sorted by lowercased name.
    pub fn search(&self, query: &str, options: &SearchOptions) -> ItemsResult<Vec<&'a ItemMeta>> {
        let needle = apply_alias(self.aliases, query).trim().to_lowercase();

        let mut hits: Vec<&'a ItemMeta> = self
            .tradeable()
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect();
        hits.sort_by_cached_key(|item| item.name.to_lowercase());

        let limit = options.limit.filter(|limit| *limit > 0);
        if !hits.is_empty() || !options.fuzzy {
            if let Some(limit) = limit {
                hits.truncate(limit);
            }
            return Ok(hits);
        }

        if self.matcher.is_none() {
            debug!(query, "No substring hits and no fuzzy matcher installed");
            return Ok(hits);
        }

        let fuzzy = FuzzyOptions {
            limit: limit.unwrap_or(DEFAULT_FUZZY_LIMIT),
            score_cutoff: options.score_cutoff,
            ..FuzzyOptions::default()
        };
        self.fuzzy_search(query, &fuzzy)
    }

    /// Fuzzy search over tradeable names, best score first.
    pub fn fuzzy_search(
        &self,
        query: &str,
        options: &FuzzyOptions,
    ) -> ItemsResult<Vec<&'a ItemMeta>> {
        let matcher = self.matcher.ok_or_else(|| {
            ItemsError::MissingCapability(
                "fuzzy search needs a FuzzyMatcher; build with the `fuzzy` feature or install one"
                    .to_string(),
            )
        })?;
        let query = apply_alias(self.aliases, query);

        let items = self.tradeable();
        let names: Vec<String> = items.iter().map(|item| item.name.clone()).collect();
        let matches = matcher.extract(
            query,
            &names,
            options.scorer,
            options.limit,
            options.score_cutoff,
        );

        Ok(matches
            .into_iter()
            .filter_map(|m| items.get(m.index).copied())
            .collect())
    }

    /// Latest price for an item id.
    pub fn latest(&self, id: u32) -> ItemsResult<&'a PriceQuote> {
        self.prices
            .get(&id)
            .ok_or_else(|| not_found(&ItemQuery::Id(id), "latest price"))
    }

    /// Tradeable metadata plus latest price.
    pub fn price(&self, id: u32) -> ItemsResult<PricedItem> {
        let meta = self.lookup(&ItemQuery::Id(id))?;
        let price = self.latest(id)?;
        Ok(PricedItem {
            meta: meta.clone(),
            price: *price,
        })
    }
}

fn not_found(query: &ItemQuery, scope: &'static str) -> ItemsError {
    ItemsError::NotFound {
        query: query.to_string(),
        scope,
    }
}
