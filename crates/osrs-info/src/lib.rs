//! Old School RuneScape data client.
//!
//! `Decoder` is the single construction point for the two API clients:
//! - player hiscores, classified into skills, clues, PvP, activities and bosses
//! - item metadata and Grand Exchange prices, with lookup and search

pub mod config;
pub mod decoder;
pub mod error;

pub use config::DecoderConfig;
pub use decoder::Decoder;
pub use error::{AppError, AppResult};

pub use osrs_core::{GameMode, ModeFlags};
pub use osrs_hiscores::{GetOptions, HiscoresApi, PlayerHiscores, StatsSnapshot};
pub use osrs_items::{FuzzyOptions, ItemMeta, ItemQuery, ItemsClient, PriceQuote, PricedItem, SearchOptions};
