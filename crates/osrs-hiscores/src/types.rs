//! Raw hiscores rows as returned by `index_lite.json`.
//!
//! Rows are stored in the snapshot buckets unchanged; the display name is kept
//! alongside the normalized key it was filed under.

use serde::{Deserialize, Serialize};

/// Rank reported for players outside the ranked range.
pub const UNRANKED: i64 = -1;

fn unranked() -> i64 {
    UNRANKED
}

/// One skill row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRow {
    #[serde(default)]
    pub id: Option<u32>,
    /// Display name (e.g., "Attack").
    pub name: String,
    #[serde(default = "unranked")]
    pub rank: i64,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub xp: Option<i64>,
}

impl SkillRow {
    pub fn new(name: impl Into<String>, rank: i64, level: i64, xp: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            rank,
            level: Some(level),
            xp: Some(xp),
        }
    }
}

/// One activity row: clue scrolls, PvP, minigame points or a boss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRow {
    #[serde(default)]
    pub id: Option<u32>,
    /// Display name (e.g., "Clue Scrolls (all)").
    pub name: String,
    #[serde(default = "unranked")]
    pub rank: i64,
    #[serde(default)]
    pub score: Option<i64>,
}

impl ActivityRow {
    pub fn new(name: impl Into<String>, rank: i64, score: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            rank,
            score: Some(score),
        }
    }
}

/// The whole `index_lite.json` document.
///
/// Missing `skills` or `activities` decode as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHiscores {
    /// Player display name echoed by the API.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillRow>,
    #[serde(default)]
    pub activities: Vec<ActivityRow>,
}

impl RawHiscores {
    /// True when the document carries no rows at all.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.activities.is_empty()
    }
}
