//! Classified hiscores buckets.
//!
//! A `Bucket` is an ordered map: keys are normalized names, iteration follows
//! the order rows first appeared in the API response. Every key in the order
//! list has an entry and every entry has exactly one position in the order.

use crate::error::{HiscoresError, HiscoresResult};
use crate::types::{ActivityRow, SkillRow};
use osrs_core::normalize;
use std::collections::HashMap;
use std::slice;

/// Numeric field of a hiscores row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Id,
    Rank,
    Level,
    Xp,
    Score,
}

/// Row types that can be projected onto a `StatField`.
pub trait StatEntry {
    /// Display name as returned by the API.
    fn display_name(&self) -> &str;

    /// Value of `field`, or `None` if the row has no such value.
    fn stat(&self, field: StatField) -> Option<i64>;
}

impl StatEntry for SkillRow {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn stat(&self, field: StatField) -> Option<i64> {
        match field {
            StatField::Id => self.id.map(i64::from),
            StatField::Rank => Some(self.rank),
            StatField::Level => self.level,
            StatField::Xp => self.xp,
            StatField::Score => None,
        }
    }
}

impl StatEntry for ActivityRow {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn stat(&self, field: StatField) -> Option<i64> {
        match field {
            StatField::Id => self.id.map(i64::from),
            StatField::Rank => Some(self.rank),
            StatField::Score => self.score,
            StatField::Level | StatField::Xp => None,
        }
    }
}

/// Ordered, keyed collection of hiscores rows.
#[derive(Debug, Clone)]
pub struct Bucket<E> {
    name: &'static str,
    order: Vec<String>,
    entries: HashMap<String, E>,
}

impl<E> Bucket<E> {
    /// Create an empty bucket. `name` is used in error messages.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert `entry` under an already-normalized `key`.
    ///
    /// A repeated key keeps its first position and takes the new entry.
    /// Returns `false` in that case.
    pub(crate) fn insert(&mut self, key: String, entry: E) -> bool {
        if self.entries.insert(key.clone(), entry).is_some() {
            return false;
        }
        self.order.push(key);
        true
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in API order.
    pub fn keys(&self) -> &[String] {
        &self.order
    }

    /// Check whether `key` (raw or normalized) is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize(key))
    }

    /// Get the entry for `key` (raw or normalized).
    pub fn get(&self, key: &str) -> HiscoresResult<&E> {
        self.entries
            .get(&normalize(key))
            .ok_or_else(|| HiscoresError::NotFound {
                bucket: self.name,
                key: key.to_string(),
            })
    }

    /// Get the entry for `key`, or `default` if absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a E) -> &'a E {
        self.entries.get(&normalize(key)).unwrap_or(default)
    }

    /// Iterate `(key, entry)` pairs in API order.
    pub fn iter(&self) -> BucketIter<'_, E> {
        BucketIter {
            keys: self.order.iter(),
            entries: &self.entries,
        }
    }
}

impl<E: StatEntry> Bucket<E> {
    /// Project one numeric field of the entry for `key`.
    ///
    /// Fails if the key is absent; `Ok(None)` if the row lacks that field.
    pub fn field(&self, key: &str, field: StatField) -> HiscoresResult<Option<i64>> {
        self.get(key).map(|entry| entry.stat(field))
    }

    /// Project one numeric field, falling back to `default` when the key or
    /// the field is absent.
    pub fn field_or(&self, key: &str, field: StatField, default: i64) -> i64 {
        self.entries
            .get(&normalize(key))
            .and_then(|entry| entry.stat(field))
            .unwrap_or(default)
    }
}

impl<'a, E> IntoIterator for &'a Bucket<E> {
    type Item = (&'a str, &'a E);
    type IntoIter = BucketIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a bucket in API order.
pub struct BucketIter<'a, E> {
    keys: slice::Iter<'a, String>,
    entries: &'a HashMap<String, E>,
}

impl<'a, E> Iterator for BucketIter<'a, E> {
    type Item = (&'a str, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        // `insert` keeps `order` and `entries` in step
        self.keys
            .next()
            .map(|key| (key.as_str(), &self.entries[key]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<E> ExactSizeIterator for BucketIter<'_, E> {}

/// A player's hiscores split into five buckets.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub(crate) skills: Bucket<SkillRow>,
    pub(crate) clues: Bucket<ActivityRow>,
    pub(crate) pvp: Bucket<ActivityRow>,
    pub(crate) activities: Bucket<ActivityRow>,
    pub(crate) bosses: Bucket<ActivityRow>,
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsSnapshot {
    /// Create a snapshot with five empty buckets.
    pub fn new() -> Self {
        Self {
            skills: Bucket::new("skill"),
            clues: Bucket::new("clue"),
            pvp: Bucket::new("pvp"),
            activities: Bucket::new("activity"),
            bosses: Bucket::new("boss"),
        }
    }

    pub fn skills(&self) -> &Bucket<SkillRow> {
        &self.skills
    }

    pub fn clues(&self) -> &Bucket<ActivityRow> {
        &self.clues
    }

    pub fn pvp(&self) -> &Bucket<ActivityRow> {
        &self.pvp
    }

    /// Non-boss, non-PvP activities (minigame points, collection log, ...).
    pub fn activities(&self) -> &Bucket<ActivityRow> {
        &self.activities
    }

    pub fn bosses(&self) -> &Bucket<ActivityRow> {
        &self.bosses
    }

    /// Skill keys in API order.
    pub fn skill_order(&self) -> &[String] {
        self.skills.keys()
    }

    // Skills

    pub fn skill(&self, key: &str) -> HiscoresResult<&SkillRow> {
        self.skills.get(key)
    }

    pub fn skill_level(&self, key: &str) -> HiscoresResult<Option<i64>> {
        self.skills.field(key, StatField::Level)
    }

    pub fn skill_xp(&self, key: &str) -> HiscoresResult<Option<i64>> {
        self.skills.field(key, StatField::Xp)
    }

    // Activities

    pub fn clue(&self, key: &str) -> HiscoresResult<&ActivityRow> {
        self.clues.get(key)
    }

    pub fn clue_score(&self, key: &str) -> HiscoresResult<Option<i64>> {
        self.clues.field(key, StatField::Score)
    }

    pub fn pvp_activity(&self, key: &str) -> HiscoresResult<&ActivityRow> {
        self.pvp.get(key)
    }

    pub fn pvp_score(&self, key: &str) -> HiscoresResult<Option<i64>> {
        self.pvp.field(key, StatField::Score)
    }

    pub fn activity(&self, key: &str) -> HiscoresResult<&ActivityRow> {
        self.activities.get(key)
    }

    pub fn activity_score(&self, key: &str) -> HiscoresResult<Option<i64>> {
        self.activities.field(key, StatField::Score)
    }

    pub fn boss(&self, key: &str) -> HiscoresResult<&ActivityRow> {
        self.bosses.get(key)
    }

    pub fn boss_score(&self, key: &str) -> HiscoresResult<Option<i64>> {
        self.bosses.field(key, StatField::Score)
    }
}
