use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Telemetry channels exposed by the provider. Each one has its own cache partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedType {
    PowerTotal,
    PowerHeatPump,
}

impl FeedType {
    pub const ALL: [FeedType; 2] = [FeedType::PowerTotal, FeedType::PowerHeatPump];

    /// Name used in request paths, e.g. `/api/power_total/day/2020-11-01`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedType::PowerTotal => "power_total",
            FeedType::PowerHeatPump => "power_heat_pump",
        }
    }

    /// Environment variable holding the provider-side feed id.
    pub fn feed_id_var(&self) -> &'static str {
        match self {
            FeedType::PowerTotal => "FEED_ID_POWER_TOTAL",
            FeedType::PowerHeatPump => "FEED_ID_POWER_HEAT_PUMP",
        }
    }
}

impl fmt::Display for FeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeed(pub String);

impl fmt::Display for UnknownFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown feed: {}", self.0)
    }
}

impl FromStr for FeedType {
    type Err = UnknownFeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedType::ALL
            .into_iter()
            .find(|feed| feed.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFeed(s.to_string()))
    }
}
