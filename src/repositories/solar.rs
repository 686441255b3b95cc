use chrono::{Duration, NaiveDate, NaiveTime};

use crate::dates::LOCAL_TIMESTAMP_FORMAT;
use crate::models::{Sample, SampleSeries, SLOTS_PER_DAY};

/// Reference clear-sky output of a small rooftop array on a December day.
const SOLAR_WATTS: [i64; SLOTS_PER_DAY] = [
    0, 0, 0, 0, 0, 0, 0, 0, // 00:00 - 03:30
    0, 0, 0, 0, 0, 0, 0, 50, // 04:00 - 07:30
    150, 300, 700, 1200, 1700, 2000, 2150, 2250, // 08:00 - 11:30
    2300, 2350, 2350, 2350, 2300, 2250, 2150, 2000, // 12:00 - 15:30
    1700, 1200, 700, 300, 150, 50, 0, 0, // 16:00 - 19:30
    0, 0, 0, 0, 0, 0, 0, 0, // 20:00 - 23:30
];

const REFERENCE_DAY: NaiveDate = match NaiveDate::from_ymd_opt(2020, 12, 1) {
    Some(date) => date,
    None => panic!("invalid reference day"),
};

pub fn solar_reference_day() -> SampleSeries {
    let midnight = REFERENCE_DAY.and_time(NaiveTime::MIN);
    let samples = SOLAR_WATTS
        .iter()
        .zip(0i64..)
        .map(|(&watts, slot)| {
            let start = midnight + Duration::minutes(30 * slot);
            Sample::new(start.format(LOCAL_TIMESTAMP_FORMAT).to_string(), watts)
        })
        .collect();

    SampleSeries::new(samples).unwrap_or_else(|len| unreachable!("solar table has {} slots", len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_day_shape() {
        let series = solar_reference_day();
        let samples = series.samples();

        assert_eq!(samples.len(), SLOTS_PER_DAY);
        assert_eq!(samples[0].start_time, "2020-12-01T00:00:00");
        assert_eq!(samples[25].start_time, "2020-12-01T12:30:00");
        assert_eq!(samples[25].average_power_watts, 2350);
        assert_eq!(samples[47].start_time, "2020-12-01T23:30:00");
        assert!(samples[..15].iter().all(|s| s.average_power_watts == 0));
    }
}
