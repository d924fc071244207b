//! Classification hints for hiscores activities.
//!
//! These are not ordering lists. They only decide which bucket an activity
//! lands in; anything unmatched is treated as a boss, so new bosses need no
//! change here. All entries are normalized keys (see `osrs_core::normalize`).

/// Prefix shared by every clue scroll tier.
pub const CLUE_PREFIX: &str = "clue_scrolls_";

/// PvP-related activities.
pub const PVP_ACTIVITY_KEYS: &[&str] = &[
    "bounty_hunter_hunter",
    "bounty_hunter_rogue",
    "bounty_hunter_legacy_hunter",
    "bounty_hunter_legacy_rogue",
    "last_man_standing",
    "lms_rank",
    "pvp_arena_rank",
    "pvp_arena",
    "soul_wars_zeal",
    "rifts_closed",
];

/// Stable non-boss activities that don't follow a suffix rule.
pub const NON_BOSS_ACTIVITY_KEYS: &[&str] = &[
    "grid_points",
    "league_points",
    "deadman_points",
    "seasonal_points",
    "tournament_points",
    "collection_log",
    "collections_logged",
    "colosseum_glory",
];

/// Suffixes that mark a key as a misc activity.
pub const MISC_ACTIVITY_SUFFIXES: &[&str] = &["_points", "_rank"];

#[cfg(test)]
mod tests {
    use super::*;
    use osrs_core::normalize;

    #[test]
    fn test_key_sets_are_normalized() {
        for key in PVP_ACTIVITY_KEYS.iter().chain(NON_BOSS_ACTIVITY_KEYS) {
            assert_eq!(normalize(key), *key);
        }
    }

    #[test]
    fn test_key_sets_are_disjoint() {
        for key in PVP_ACTIVITY_KEYS {
            assert!(!NON_BOSS_ACTIVITY_KEYS.contains(key), "{key} in both sets");
        }
    }
}
