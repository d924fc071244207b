//! Single-value cache cell with explicit state.
//!
//! A cell starts `Empty`, becomes `Populated` on the first successful fetch
//! and turns `Stale` when invalidated. A stale cell still serves its last
//! value until the next fetch replaces it; a failed fetch leaves it untouched.

use chrono::{DateTime, Utc};

/// Cache cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Populated,
    Stale,
}

/// Cached value with fetch timestamp and version.
#[derive(Debug, Clone)]
pub struct CacheCell<T> {
    value: T,
    state: CacheState,
    fetched_at: Option<DateTime<Utc>>,
    version: u64,
}

impl<T: Default> Default for CacheCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> CacheCell<T> {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self {
            value: T::default(),
            state: CacheState::Empty,
            fetched_at: None,
            version: 0,
        }
    }
}

impl<T> CacheCell<T> {
    pub fn state(&self) -> CacheState {
        self.state
    }

    pub fn is_populated(&self) -> bool {
        self.state == CacheState::Populated
    }

    /// Whether the next access must fetch.
    pub fn needs_fetch(&self, refresh: bool) -> bool {
        refresh || self.state != CacheState::Populated
    }

    /// Current value. Empty cells hold `T::default()`.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Time of the last successful fetch.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Number of successful fetches so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Store a freshly fetched value.
    pub fn replace(&mut self, value: T) -> &T {
        self.value = value;
        self.state = CacheState::Populated;
        self.fetched_at = Some(Utc::now());
        self.version += 1;
        &self.value
    }

    /// Mark the value stale. Empty cells stay empty.
    pub fn invalidate(&mut self) {
        if self.state == CacheState::Populated {
            self.state = CacheState::Stale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell_needs_fetch() {
        let cell: CacheCell<Vec<u32>> = CacheCell::new();
        assert_eq!(cell.state(), CacheState::Empty);
        assert!(cell.needs_fetch(false));
        assert!(cell.get().is_empty());
        assert_eq!(cell.fetched_at(), None);
        assert_eq!(cell.version(), 0);
    }

    #[test]
    fn test_replace_populates() {
        let mut cell = CacheCell::new();
        assert_eq!(cell.replace(vec![1, 2]), &vec![1, 2]);
        assert!(cell.is_populated());
        assert!(!cell.needs_fetch(false));
        assert!(cell.needs_fetch(true));
        assert!(cell.fetched_at().is_some());
        assert_eq!(cell.version(), 1);

        cell.replace(vec![3]);
        assert_eq!(cell.get(), &vec![3]);
        assert_eq!(cell.version(), 2);
    }

    #[test]
    fn test_invalidate_keeps_value() {
        let mut cell = CacheCell::new();
        cell.replace(vec![1]);
        cell.invalidate();

        assert_eq!(cell.state(), CacheState::Stale);
        assert!(cell.needs_fetch(false));
        assert_eq!(cell.get(), &vec![1]);
    }

    #[test]
    fn test_invalidate_empty_stays_empty() {
        let mut cell: CacheCell<Vec<u32>> = CacheCell::new();
        cell.invalidate();
        assert_eq!(cell.state(), CacheState::Empty);
    }
}
