use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::env;

use crate::error::AppError;
use crate::models::FeedType;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub warmup: WarmupConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub feed_ids: BTreeMap<FeedType, String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct WarmupConfig {
    pub enabled: bool,
    pub start: NaiveDate,
    /// Exclusive.
    pub end: NaiveDate,
}

const DEFAULT_BASE_URL: &str = "https://emoncms.org";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_WARMUP_START: &str = "2020-10-01";
const DEFAULT_WARMUP_END: &str = "2020-12-31";

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .ok_or_else(|| AppError::Config("PORT must be set".to_string()))?;
        let port = port
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("PORT is not a valid port: {}", port)))?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let feed_ids = FeedType::ALL
            .into_iter()
            .filter_map(|feed| {
                non_empty(lookup(feed.feed_id_var())).map(|id| (feed, id))
            })
            .collect();

        let timeout_secs = match lookup("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::Config(format!("PROVIDER_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let enabled = match lookup("WARMUP_ENABLED") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!("WARMUP_ENABLED is not a boolean: {}", raw))
            })?,
            None => true,
        };

        Ok(Config {
            server: ServerConfig { host, port },
            provider: ProviderConfig {
                base_url: lookup("EMONCMS_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                api_key: non_empty(lookup("EMONCMS_API_KEY")),
                feed_ids,
                timeout_secs,
            },
            warmup: WarmupConfig {
                enabled,
                start: parse_config_date(&lookup, "WARMUP_START", DEFAULT_WARMUP_START)?,
                end: parse_config_date(&lookup, "WARMUP_END", DEFAULT_WARMUP_END)?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Unlike request paths, a bad date here is an operator mistake and fails startup.
fn parse_config_date<F>(lookup: &F, key: &str, default: &str) -> Result<NaiveDate, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::Config(format!("{} is not a yyyy-MM-dd date ({}): {}", key, e, raw)))
}
