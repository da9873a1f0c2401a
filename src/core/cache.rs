//! Session-wide resolution cache.
//!
//! One entry per ticker, written at most once. `Resolved` and `Failed` are both
//! final for the life of the cache, so a `Failed` entry doubles as a negative
//! cache that suppresses every later network attempt for that ticker.

use crate::domain::model::{CacheEntry, Ticker};
use crate::domain::ports::LogoCache;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub resolved: usize,
    pub failed: usize,
}

#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: DashMap<Ticker, CacheEntry>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by ticker.
    pub fn snapshot(&self) -> Vec<(Ticker, CacheEntry)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    pub fn stats(&self) -> CacheStats {
        self.entries
            .iter()
            .fold(CacheStats::default(), |mut stats, e| {
                match e.value() {
                    CacheEntry::Resolved(_) => stats.resolved += 1,
                    CacheEntry::Failed => stats.failed += 1,
                    CacheEntry::Pending => {}
                }
                stats
            })
    }
}

impl LogoCache for ResolutionCache {
    fn get(&self, ticker: &Ticker) -> Option<CacheEntry> {
        self.entries.get(ticker).map(|e| e.value().clone())
    }

    fn put(&self, ticker: &Ticker, entry: CacheEntry) -> bool {
        if !entry.is_terminal() {
            return false;
        }

        // The entry guard holds the shard lock, so check-and-insert is atomic per key.
        match self.entries.entry(ticker.clone()) {
            Entry::Vacant(slot) => {
                tracing::info!("Cached {} as {:?}", ticker, entry);
                slot.insert(entry);
                true
            }
            Entry::Occupied(mut slot) if !slot.get().is_terminal() => {
                slot.insert(entry);
                true
            }
            Entry::Occupied(slot) => {
                tracing::debug!(
                    "Ignoring {:?} for {}; already cached as {:?}",
                    entry,
                    ticker,
                    slot.get()
                );
                false
            }
        }
    }
}
