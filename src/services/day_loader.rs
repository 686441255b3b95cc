use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::ProviderError;
use crate::models::{FeedType, SampleSeries};
use crate::repositories::{CacheKey, DayCache, TelemetryProvider};

/// Cache-first access to a feed's day series.
#[derive(Clone)]
pub struct DayCacheLoader {
    cache: DayCache,
    provider: Arc<dyn TelemetryProvider>,
}

impl DayCacheLoader {
    pub fn new(cache: DayCache, provider: Arc<dyn TelemetryProvider>) -> Self {
        Self { cache, provider }
    }

    pub fn cache(&self) -> &DayCache {
        &self.cache
    }

    /// Returns a caller-owned copy of the day, fetching and caching it on a miss.
    ///
    /// A failed fetch leaves the cache untouched so the next call tries again.
    pub async fn load(&self, feed: FeedType, date: NaiveDate) -> Result<SampleSeries, ProviderError> {
        let key = CacheKey::new(feed, date);

        if let Some(series) = self.cache.get_copy(&key).await {
            debug!(%feed, %date, "Cache hit");
            return Ok(series);
        }

        info!(%feed, %date, "Cache entry not found, fetching from provider");
        let series = self
            .provider
            .fetch_day(feed, date)
            .await
            .inspect_err(|e| warn!(%feed, %date, error = %e, "Provider fetch failed"))?;

        let copy = series.clone();
        self.cache.put(key, series).await;
        Ok(copy)
    }
}
