//! Item catalog for osrs-info.
//!
//! Wraps the OSRS Wiki real-time prices API:
//! - `/mapping`: item metadata (name, examine text, alch values, buy limit)
//! - `/latest`: latest instant-buy and instant-sell prices
//!
//! Only items with price data are considered tradeable; lookup and search
//! never return anything else. Fuzzy search is an optional capability, on by
//! default through the `fuzzy` feature.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod search;
pub mod types;

pub use cache::{CacheCell, CacheState};
pub use client::ItemsClient;
pub use config::ItemsConfig;
pub use error::{ItemsError, ItemsResult};
#[cfg(feature = "fuzzy")]
pub use fuzzy::StrsimMatcher;
pub use fuzzy::{FuzzyMatch, FuzzyMatcher, Scorer};
pub use search::{apply_alias, FuzzyOptions, SearchEngine, SearchOptions};
pub use types::{ItemMeta, ItemQuery, PriceQuote, PricedItem};
