use serde::{Deserialize, Serialize};

/// Half-hour buckets in one local calendar day.
pub const SLOTS_PER_DAY: usize = 48;

/// One half-hour average power reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Local wall-clock start of the bucket, `yyyy-MM-ddTHH:mm:ss` without offset.
    pub start_time: String,
    pub average_power_watts: i64,
}

impl Sample {
    pub fn new(start_time: impl Into<String>, average_power_watts: i64) -> Self {
        Self {
            start_time: start_time.into(),
            average_power_watts,
        }
    }
}

/// Exactly [`SLOTS_PER_DAY`] samples for one day, ascending from local midnight.
///
/// `Clone` produces a fully independent copy, which is what the day cache hands out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSeries(Vec<Sample>);

impl SampleSeries {
    /// Wraps `samples`, returning the offending length if it is not [`SLOTS_PER_DAY`].
    pub fn new(samples: Vec<Sample>) -> Result<Self, usize> {
        if samples.len() == SLOTS_PER_DAY {
            Ok(Self(samples))
        } else {
            Err(samples.len())
        }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.0
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.0
    }

    /// Zeroes every wattage, keeping the timestamps.
    pub fn zero_out(&mut self) {
        for sample in &mut self.0 {
            sample.average_power_watts = 0;
        }
    }

    /// Adds `other`'s wattage slot by slot.
    pub fn accumulate(&mut self, other: &SampleSeries) {
        for (sample, addend) in self.0.iter_mut().zip(other.samples()) {
            sample.average_power_watts += addend.average_power_watts;
        }
    }

    /// Integer division of every slot, truncating toward zero.
    pub fn divide_by(&mut self, denominator: i64) {
        for sample in &mut self.0 {
            sample.average_power_watts /= denominator;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(watts: i64) -> SampleSeries {
        let samples = (0..SLOTS_PER_DAY)
            .map(|slot| {
                Sample::new(
                    format!("2021-02-01T{:02}:{:02}:00", slot / 2, (slot % 2) * 30),
                    watts,
                )
            })
            .collect();
        SampleSeries::new(samples).unwrap()
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(SampleSeries::new(vec![Sample::new("x", 1)]), Err(1));
        assert_eq!(SampleSeries::new(Vec::new()), Err(0));
    }

    #[test]
    fn test_accumulate_and_divide() {
        let mut working = series(7);
        working.zero_out();
        working.accumulate(&series(10));
        working.accumulate(&series(11));
        working.divide_by(3);

        assert!(working.samples().iter().all(|s| s.average_power_watts == 7));
        assert_eq!(working.samples()[47].start_time, "2021-02-01T23:30:00");
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        let mut negative = series(-7);
        negative.divide_by(2);
        assert_eq!(negative.samples()[0].average_power_watts, -3);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = series(5);
        let mut copy = original.clone();
        copy.zero_out();

        assert_eq!(original.samples()[0].average_power_watts, 5);
        assert_eq!(copy.samples()[0].average_power_watts, 0);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_value(series(3)).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), SLOTS_PER_DAY);
        assert_eq!(
            array[1],
            serde_json::json!({ "startTime": "2021-02-01T00:30:00", "averagePowerWatts": 3 })
        );
    }
}
