//! Fuzzy name matching.
//!
//! `FuzzyMatcher` is an optional capability of the item catalog. The default
//! implementation, `StrsimMatcher`, is compiled with the `fuzzy` feature and
//! scores on a 0-100 scale in the style of the usual fuzzy-string scorers.

use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

/// Similarity scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scorer {
    /// Plain edit-distance similarity.
    Ratio,
    /// Best match of the shorter string against windows of the longer one.
    PartialRatio,
    /// Ratio of whitespace tokens after sorting.
    TokenSortRatio,
    /// Ratio built from shared and distinct token sets.
    TokenSetRatio,
    /// Weighted best of the other scorers, adjusted for length difference.
    #[default]
    WRatio,
}

impl Scorer {
    /// Parse a scorer name case-insensitively (`"token_sort_ratio"`,
    /// `"WRatio"`, ...). Unknown names fall back to `WRatio`.
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "ratio" => Self::Ratio,
            "partialratio" => Self::PartialRatio,
            "tokensortratio" => Self::TokenSortRatio,
            "tokensetratio" => Self::TokenSetRatio,
            "wratio" => Self::WRatio,
            _ => {
                warn!(scorer = name, "Unknown scorer; using WRatio");
                Self::WRatio
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ratio => "ratio",
            Self::PartialRatio => "partial_ratio",
            Self::TokenSortRatio => "token_sort_ratio",
            Self::TokenSetRatio => "token_set_ratio",
            Self::WRatio => "WRatio",
        }
    }
}

impl fmt::Display for Scorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored candidate: position in the choice list and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    pub index: usize,
    pub score: f64,
}

/// Scores candidate names against a query.
#[cfg_attr(test, mockall::automock)]
pub trait FuzzyMatcher: Send + Sync {
    /// Return choices scoring at least `score_cutoff`, best first, at most
    /// `limit` of them (0 = unlimited). Equal scores keep choice order.
    fn extract(
        &self,
        query: &str,
        choices: &[String],
        scorer: Scorer,
        limit: usize,
        score_cutoff: f64,
    ) -> Vec<FuzzyMatch>;
}

/// Order matches best first, keeping choice order for ties, and apply `limit`.
pub fn rank_matches(mut matches: Vec<FuzzyMatch>, limit: usize) -> Vec<FuzzyMatch> {
    // stable sort: ties stay in choice order
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    if limit > 0 {
        matches.truncate(limit);
    }
    matches
}

/// `FuzzyMatcher` backed by `strsim`. Case-insensitive.
#[cfg(feature = "fuzzy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StrsimMatcher;

#[cfg(feature = "fuzzy")]
impl StrsimMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Score two strings with `scorer` (0-100).
    pub fn score(&self, scorer: Scorer, a: &str, b: &str) -> f64 {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        match scorer {
            Scorer::Ratio => scorers::ratio(&a, &b),
            Scorer::PartialRatio => scorers::partial_ratio(&a, &b),
            Scorer::TokenSortRatio => scorers::token_sort_ratio(&a, &b),
            Scorer::TokenSetRatio => scorers::token_set_ratio(&a, &b),
            Scorer::WRatio => scorers::weighted_ratio(&a, &b),
        }
    }
}

#[cfg(feature = "fuzzy")]
impl FuzzyMatcher for StrsimMatcher {
    fn extract(
        &self,
        query: &str,
        choices: &[String],
        scorer: Scorer,
        limit: usize,
        score_cutoff: f64,
    ) -> Vec<FuzzyMatch> {
        let matches = choices
            .iter()
            .enumerate()
            .filter_map(|(index, choice)| {
                let score = self.score(scorer, query, choice);
                (score >= score_cutoff).then_some(FuzzyMatch { index, score })
            })
            .collect();
        rank_matches(matches, limit)
    }
}

/// Scorers over already-lowercased, non-empty input.
#[cfg(feature = "fuzzy")]
mod scorers {
    use std::collections::BTreeSet;
    use strsim::normalized_levenshtein;

    pub fn ratio(a: &str, b: &str) -> f64 {
        normalized_levenshtein(a, b) * 100.0
    }

    pub fn partial_ratio(a: &str, b: &str) -> f64 {
        let (short, long) = if a.chars().count() <= b.chars().count() {
            (a, b)
        } else {
            (b, a)
        };
        let width = short.chars().count();
        let long: Vec<char> = long.chars().collect();
        if width == 0 || long.len() == width {
            return ratio(short, &long.iter().collect::<String>());
        }
        long.windows(width)
            .map(|window| ratio(short, &window.iter().collect::<String>()))
            .fold(0.0, f64::max)
    }

    fn sorted_tokens(s: &str) -> String {
        let mut tokens: Vec<&str> = s.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.join(" ")
    }

    fn join_tokens(head: &str, tail: &str) -> String {
        match (head.is_empty(), tail.is_empty()) {
            (true, _) => tail.to_string(),
            (_, true) => head.to_string(),
            _ => format!("{head} {tail}"),
        }
    }

    pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
        ratio(&sorted_tokens(a), &sorted_tokens(b))
    }

    pub fn token_set_ratio(a: &str, b: &str) -> f64 {
        let left: BTreeSet<&str> = a.split_whitespace().collect();
        let right: BTreeSet<&str> = b.split_whitespace().collect();

        let sect = left.intersection(&right).copied().collect::<Vec<_>>().join(" ");
        let only_left = left.difference(&right).copied().collect::<Vec<_>>().join(" ");
        let only_right = right.difference(&left).copied().collect::<Vec<_>>().join(" ");

        let combined_left = join_tokens(&sect, &only_left);
        let combined_right = join_tokens(&sect, &only_right);
        if sect.is_empty() {
            return ratio(&combined_left, &combined_right);
        }
        ratio(&sect, &combined_left)
            .max(ratio(&sect, &combined_right))
            .max(ratio(&combined_left, &combined_right))
    }

    pub fn weighted_ratio(a: &str, b: &str) -> f64 {
        const UNBASE_SCALE: f64 = 0.95;

        let base = ratio(a, b);
        let len_a = a.chars().count() as f64;
        let len_b = b.chars().count() as f64;
        let len_ratio = len_a.max(len_b) / len_a.min(len_b);

        if len_ratio < 1.5 {
            return base
                .max(token_sort_ratio(a, b) * UNBASE_SCALE)
                .max(token_set_ratio(a, b) * UNBASE_SCALE);
        }

        let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
        base.max(partial_ratio(a, b) * partial_scale).max(
            partial_ratio(&sorted_tokens(a), &sorted_tokens(b)) * UNBASE_SCALE * partial_scale,
        )
    }
}
