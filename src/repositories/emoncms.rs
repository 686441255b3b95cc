use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::dates::{format_local_millis, local_midnight_millis, next_day};
use crate::error::ProviderError;
use crate::models::{FeedType, Sample, SampleSeries, SLOTS_PER_DAY};

/// Bucket width requested from the provider.
pub const INTERVAL_SECS: u32 = 1800;

/// Raw point count on a fall-back day (one local hour repeats).
const FALL_BACK_POINTS: usize = SLOTS_PER_DAY + 2;
/// Raw point count on a spring-forward day (one local hour is skipped).
const SPRING_FORWARD_POINTS: usize = SLOTS_PER_DAY - 2;
/// Raw position where the DST hour is patched.
const DST_PATCH_POSITION: usize = 4;

/// Source of normalized day series for a feed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TelemetryProvider: Send + Sync {
    async fn fetch_day(&self, feed: FeedType, date: NaiveDate)
        -> Result<SampleSeries, ProviderError>;
}

/// `[timestampMillis, watts]` as returned by `feed/average.json`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawPoint(pub i64, pub Option<f64>);

#[derive(Debug, Clone)]
pub struct EmoncmsClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    feed_ids: BTreeMap<FeedType, String>,
}

impl EmoncmsClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            feed_ids: config.feed_ids.clone(),
        })
    }

    async fn fetch_raw(
        &self,
        feed: FeedType,
        date: NaiveDate,
    ) -> Result<Vec<RawPoint>, ProviderError> {
        let feed_id = self
            .feed_ids
            .get(&feed)
            .ok_or(ProviderError::MissingFeedId(feed))?;
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        let start = local_midnight_millis(date).to_string();
        let end = local_midnight_millis(next_day(date)).to_string();
        let interval = INTERVAL_SECS.to_string();

        let response = self
            .http
            .get(format!("{}/feed/average.json", self.base_url))
            .query(&[
                ("id", feed_id.as_str()),
                ("start", start.as_str()),
                ("end", end.as_str()),
                ("interval", interval.as_str()),
                ("apikey", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl TelemetryProvider for EmoncmsClient {
    async fn fetch_day(
        &self,
        feed: FeedType,
        date: NaiveDate,
    ) -> Result<SampleSeries, ProviderError> {
        let raw = self.fetch_raw(feed, date).await?;
        tracing::debug!(%feed, %date, points = raw.len(), "Fetched raw points");
        normalize(&raw)
    }
}

/// Converts raw provider points into a 48-sample local day.
///
/// Fall-back days (50 points) lose raw positions 4 and 5; spring-forward days
/// (46 points) repeat raw position 4 twice more. This approximates the DST hour
/// rather than reconstructing it.
pub fn normalize(raw: &[RawPoint]) -> Result<SampleSeries, ProviderError> {
    let raw_len = raw.len();
    if ![SPRING_FORWARD_POINTS, SLOTS_PER_DAY, FALL_BACK_POINTS].contains(&raw_len) {
        return Err(ProviderError::UnexpectedPointCount(raw_len));
    }

    let mut samples = Vec::with_capacity(SLOTS_PER_DAY);
    for (position, &RawPoint(millis, watts)) in raw.iter().enumerate() {
        if raw_len == FALL_BACK_POINTS
            && (position == DST_PATCH_POSITION || position == DST_PATCH_POSITION + 1)
        {
            continue;
        }

        let sample = Sample::new(
            format_local_millis(millis).ok_or(ProviderError::InvalidTimestamp(millis))?,
            watts.unwrap_or(0.0).floor() as i64,
        );

        if raw_len == SPRING_FORWARD_POINTS && position == DST_PATCH_POSITION {
            samples.push(sample.clone());
            samples.push(sample.clone());
        }
        samples.push(sample);
    }

    SampleSeries::new(samples).map_err(ProviderError::UnexpectedPointCount)
}
