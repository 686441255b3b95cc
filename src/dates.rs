//! Calendar helpers for the fixed local zone the telemetry is recorded in.

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::{America::New_York, Tz};

pub const LOCAL_TZ: Tz = New_York;

/// Substituted for any request date that does not parse.
pub const FALLBACK_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2021, 2, 1) {
    Some(date) => date,
    None => panic!("invalid fallback date"),
};

pub const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses `yyyy-MM-dd`, falling back to [`FALLBACK_DATE`] instead of failing.
pub fn parse_date(input: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!(input, error = %e, fallback = %FALLBACK_DATE, "Unparseable date, using fallback");
            FALLBACK_DATE
        }
    }
}

/// The following calendar day, stepping from local noon so DST transitions cannot
/// land the cursor on the same or a skipped date.
pub fn next_day(date: NaiveDate) -> NaiveDate {
    let noon = date
        .and_hms_opt(12, 0, 0)
        .and_then(|noon| LOCAL_TZ.from_local_datetime(&noon).earliest());

    match noon {
        Some(noon) => (noon + Duration::hours(24)).date_naive(),
        None => date + Days::new(1),
    }
}

/// Epoch milliseconds of local midnight starting `date`.
pub fn local_midnight_millis(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    LOCAL_TZ
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| LOCAL_TZ.from_utc_datetime(&midnight))
        .timestamp_millis()
}

/// Renders an epoch-millisecond instant as local wall-clock time without offset.
pub fn format_local_millis(millis: i64) -> Option<String> {
    let instant = DateTime::from_timestamp_millis(millis)?;
    Some(
        instant
            .with_timezone(&LOCAL_TZ)
            .format(LOCAL_TIMESTAMP_FORMAT)
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2020-11-01"), date(2020, 11, 1));
    }

    #[test]
    fn test_parse_date_fallback() {
        assert_eq!(parse_date("not-a-date"), date(2021, 2, 1));
        assert_eq!(parse_date("2020-13-45"), FALLBACK_DATE);
        assert_eq!(parse_date(""), FALLBACK_DATE);
    }

    #[test]
    fn test_next_day_across_transitions() {
        assert_eq!(next_day(date(2020, 11, 1)), date(2020, 11, 2));
        assert_eq!(next_day(date(2021, 3, 14)), date(2021, 3, 15));
        assert_eq!(next_day(date(2020, 12, 31)), date(2021, 1, 1));
        assert_eq!(next_day(date(2020, 2, 28)), date(2020, 2, 29));
    }

    #[test]
    fn test_local_midnight_tracks_offset() {
        // EDT (UTC-4) on the fall-back day, EST (UTC-5) on the next.
        assert_eq!(local_midnight_millis(date(2020, 11, 1)), 1_604_203_200_000);
        assert_eq!(local_midnight_millis(date(2020, 11, 2)), 1_604_293_200_000);
        assert_eq!(local_midnight_millis(date(2021, 3, 14)), 1_615_698_000_000);
    }

    #[test]
    fn test_format_local_millis() {
        assert_eq!(
            format_local_millis(1_604_203_200_000).as_deref(),
            Some("2020-11-01T00:00:00")
        );
        // 06:00 UTC is 01:00 EST after the clocks went back.
        assert_eq!(
            format_local_millis(1_604_210_400_000).as_deref(),
            Some("2020-11-01T01:00:00")
        );
    }
}
