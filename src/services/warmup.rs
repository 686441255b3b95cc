//! Startup pass that fills the day cache for a fixed historical window.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::WarmupConfig;
use crate::dates::next_day;
use crate::models::FeedType;
use crate::services::DayCacheLoader;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarmupSummary {
    pub loaded: usize,
    pub failed: usize,
}

pub struct WarmupScheduler {
    loader: DayCacheLoader,
    start: NaiveDate,
    end: NaiveDate,
}

impl WarmupScheduler {
    pub fn new(loader: DayCacheLoader, config: &WarmupConfig) -> Self {
        Self {
            loader,
            start: config.start,
            end: config.end,
        }
    }

    /// Loads every day in `[start, end)` for every feed, one request at a time.
    ///
    /// Individual failures are logged and skipped. A feed whose credentials are
    /// missing is abandoned after its first failure.
    pub async fn run(&self) -> WarmupSummary {
        info!(start = %self.start, end = %self.end, "Warming up day cache");
        let mut total = WarmupSummary::default();

        for feed in FeedType::ALL {
            let summary = self.warm_feed(feed).await;
            info!(%feed, loaded = summary.loaded, failed = summary.failed, "Feed warmup finished");
            total.loaded += summary.loaded;
            total.failed += summary.failed;
        }

        total
    }

    async fn warm_feed(&self, feed: FeedType) -> WarmupSummary {
        let mut summary = WarmupSummary::default();
        let mut cursor = self.start;

        while cursor < self.end {
            match self.loader.load(feed, cursor).await {
                Ok(_) => summary.loaded += 1,
                Err(e) if e.is_configuration() => {
                    warn!(%feed, error = %e, "Skipping feed warmup");
                    summary.failed += 1;
                    break;
                }
                Err(e) => {
                    warn!(%feed, date = %cursor, error = %e, "Warmup fetch failed");
                    summary.failed += 1;
                }
            }
            cursor = next_day(cursor);
        }

        summary
    }
}
