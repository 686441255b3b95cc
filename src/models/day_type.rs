use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which days of a month contribute to an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayTypeFilter {
    All,
    Weekdays,
    Weekends,
}

impl DayTypeFilter {
    pub fn includes(&self, date: NaiveDate) -> bool {
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        match self {
            DayTypeFilter::All => true,
            DayTypeFilter::Weekdays => !weekend,
            DayTypeFilter::Weekends => weekend,
        }
    }
}

impl FromStr for DayTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DayTypeFilter::All),
            "weekdays" => Ok(DayTypeFilter::Weekdays),
            "weekends" => Ok(DayTypeFilter::Weekends),
            other => Err(format!(
                "Unknown day type: {} (expected all, weekdays or weekends)",
                other
            )),
        }
    }
}
