use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{FeedType, SampleSeries};

/// A feed's day. Dates carry no time of day, so two instants on the same local
/// date always share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub feed: FeedType,
    pub date: NaiveDate,
}

impl CacheKey {
    pub fn new(feed: FeedType, date: NaiveDate) -> Self {
        Self { feed, date }
    }
}

/// Unbounded, never-evicting store of normalized days.
///
/// Entries are immutable once stored: [`DayCache::get`] shares the canonical
/// series read-only, [`DayCache::get_copy`] hands out an owned copy the caller
/// may mutate freely.
#[derive(Debug, Clone, Default)]
pub struct DayCache {
    entries: Arc<RwLock<HashMap<CacheKey, Arc<SampleSeries>>>>,
}

impl DayCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &CacheKey) -> Option<Arc<SampleSeries>> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn get_copy(&self, key: &CacheKey) -> Option<SampleSeries> {
        self.entries
            .read()
            .await
            .get(key)
            .map(|series| SampleSeries::clone(series))
    }

    /// Stores `series` under `key`. A concurrent fetch of the same key may
    /// overwrite it with an equal value.
    pub async fn put(&self, key: CacheKey, series: SampleSeries) {
        self.entries.write().await.insert(key, Arc::new(series));
    }

    pub async fn contains(&self, key: &CacheKey) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
