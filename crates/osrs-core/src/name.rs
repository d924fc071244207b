//! Display-name normalization.
//!
//! The hiscores API labels rows with display names such as
//! `"Bounty Hunter - Hunter"` or `"Clue Scrolls (all)"`. Every bucket is keyed
//! by the normalized form, and user-supplied keys go through the same function,
//! so `"Clue Scrolls (all)"`, `"clue scrolls all"` and `"clue_scrolls_all"` all
//! resolve to the same entry.

/// Characters that act as word breaks.
const SEPARATORS: [char; 5] = ['-', ':', '(', ')', ','];

/// Characters removed outright (`Phosani's` -> `phosanis`).
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Convert a display name into a stable snake_case key.
///
/// Trims, lowercases, drops apostrophes, turns `- : ( ) ,` into spaces,
/// collapses whitespace and joins the words with `_`. Idempotent.
pub fn normalize(name: &str) -> String {
    let spaced: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !APOSTROPHES.contains(c))
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_display_names() {
        assert_eq!(normalize("Overall"), "overall");
        assert_eq!(normalize("Clue Scrolls (all)"), "clue_scrolls_all");
        assert_eq!(normalize("Bounty Hunter - Hunter"), "bounty_hunter_hunter");
        assert_eq!(normalize("TzKal-Zuk"), "tzkal_zuk");
        assert_eq!(normalize("Phosani's Nightmare"), "phosanis_nightmare");
        assert_eq!(
            normalize("Theatre of Blood: Hard Mode"),
            "theatre_of_blood_hard_mode"
        );
        assert_eq!(normalize("LMS - Rank"), "lms_rank");
    }

    #[test]
    fn test_normalize_whitespace_and_empty() {
        assert_eq!(normalize("   Vet'ion  "), "vetion");
        assert_eq!(normalize("Dagannoth   Prime"), "dagannoth_prime");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" - ( ) "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let names = [
            "Clue Scrolls (beginner)",
            "Bounty Hunter (Legacy) - Rogue",
            "Colosseum Glory",
            "K'ril Tsutsaroth",
            "Chambers of Xeric: Challenge Mode",
            "already_normal_key",
        ];
        for name in names {
            let once = normalize(name);
            assert_eq!(normalize(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_normalize_case_and_punctuation_insensitive() {
        assert_eq!(
            normalize("Bounty Hunter - Hunter"),
            normalize("bounty_hunter_hunter")
        );
        assert_eq!(normalize("ZULRAH"), normalize("zulrah"));
        assert_eq!(normalize("Kree'Arra"), normalize("kreearra"));
    }
}
