use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::dates::next_day;
use crate::error::ProviderError;
use crate::models::{DayTypeFilter, FeedType, SampleSeries};
use crate::services::DayCacheLoader;

/// Per-slot averages over the rest of a calendar month.
#[derive(Clone)]
pub struct MonthlyAverager {
    loader: DayCacheLoader,
}

impl MonthlyAverager {
    pub fn new(loader: DayCacheLoader) -> Self {
        Self { loader }
    }

    /// Averages every day from `anchor` to the end of its month that passes
    /// `filter`. Output timestamps are the anchor day's.
    ///
    /// The denominator starts at 1 before any day is counted, so it is always one
    /// more than the number of days summed. Historical outputs depend on this.
    pub async fn average(
        &self,
        feed: FeedType,
        filter: DayTypeFilter,
        anchor: NaiveDate,
    ) -> Result<SampleSeries, ProviderError> {
        let mut working = self.loader.load(feed, anchor).await?;
        working.zero_out();

        let mut denominator: i64 = 1;
        let target_month = anchor.month();
        let mut cursor = anchor;

        while cursor.month() == target_month {
            if filter.includes(cursor) {
                let day = self.loader.load(feed, cursor).await?;
                denominator += 1;
                working.accumulate(&day);
            }
            cursor = next_day(cursor);
        }

        debug!(%feed, ?filter, %anchor, denominator, "Averaged month");
        working.divide_by(denominator);
        Ok(working)
    }
}
