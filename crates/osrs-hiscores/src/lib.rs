//! Player hiscores for osrs-info.
//!
//! The hiscores `index_lite.json` endpoint returns two flat lists:
//! - `skills`: one row per skill, in a stable order
//! - `activities`: clue scrolls, PvP activities, minigame points and boss
//!   kill counts, all mixed together
//!
//! `HiscoresClient` fetches the raw document, `classify` splits it into five
//! ordered buckets keyed by normalized name, and `HiscoresApi` composes the two.

pub mod api;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod keys;
pub mod snapshot;
pub mod types;

pub use api::{GetOptions, HiscoresApi, PlayerHiscores};
pub use classify::{classify, classify_activity, ActivityClass};
pub use client::HiscoresClient;
pub use config::HiscoresConfig;
pub use error::{HiscoresError, HiscoresResult};
pub use snapshot::{Bucket, StatEntry, StatField, StatsSnapshot};
pub use types::{ActivityRow, RawHiscores, SkillRow};
