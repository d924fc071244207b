//! Hiscores classification.
//!
//! Skills go straight into the skill bucket. Activities are routed by their
//! normalized key, first match wins:
//! 1. `clue_scrolls_*` -> clues
//! 2. a known PvP key -> pvp
//! 3. a known non-boss key, or `*_points` / `*_rank` -> activities
//! 4. anything else -> bosses

use crate::keys::{CLUE_PREFIX, MISC_ACTIVITY_SUFFIXES, NON_BOSS_ACTIVITY_KEYS, PVP_ACTIVITY_KEYS};
use crate::snapshot::{Bucket, StatsSnapshot};
use crate::types::RawHiscores;
use osrs_core::normalize;
use osrs_telemetry::Metrics;
use tracing::{debug, warn};

/// Bucket an activity row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityClass {
    Clue,
    Pvp,
    Misc,
    Boss,
}

/// Classify a normalized activity key.
pub fn classify_activity(key: &str) -> ActivityClass {
    if key.starts_with(CLUE_PREFIX) {
        ActivityClass::Clue
    } else if PVP_ACTIVITY_KEYS.iter().any(|k| *k == key) {
        ActivityClass::Pvp
    } else if NON_BOSS_ACTIVITY_KEYS.iter().any(|k| *k == key)
        || MISC_ACTIVITY_SUFFIXES
            .iter()
            .any(|suffix| key.ends_with(suffix))
    {
        ActivityClass::Misc
    } else {
        ActivityClass::Boss
    }
}

/// Split a raw hiscores document into a fresh snapshot.
///
/// Never fails; empty lists give empty buckets.
pub fn classify(raw: &RawHiscores) -> StatsSnapshot {
    let mut snapshot = StatsSnapshot::new();

    for row in &raw.skills {
        file(&mut snapshot.skills, normalize(&row.name), row.clone());
    }

    for row in &raw.activities {
        let key = normalize(&row.name);
        let bucket = match classify_activity(&key) {
            ActivityClass::Clue => &mut snapshot.clues,
            ActivityClass::Pvp => &mut snapshot.pvp,
            ActivityClass::Misc => &mut snapshot.activities,
            ActivityClass::Boss => &mut snapshot.bosses,
        };
        file(bucket, key, row.clone());
    }

    for (bucket, count) in [
        (snapshot.skills.name(), snapshot.skills.len()),
        (snapshot.clues.name(), snapshot.clues.len()),
        (snapshot.pvp.name(), snapshot.pvp.len()),
        (snapshot.activities.name(), snapshot.activities.len()),
        (snapshot.bosses.name(), snapshot.bosses.len()),
    ] {
        Metrics::rows_classified(bucket, count);
    }

    debug!(
        skills = snapshot.skills.len(),
        clues = snapshot.clues.len(),
        pvp = snapshot.pvp.len(),
        activities = snapshot.activities.len(),
        bosses = snapshot.bosses.len(),
        "Classified hiscores"
    );

    snapshot
}

fn file<E>(bucket: &mut Bucket<E>, key: String, entry: E) {
    if !bucket.insert(key.clone(), entry) {
        warn!(bucket = bucket.name(), %key, "Duplicate hiscores row; keeping first position, last value");
    }
}
