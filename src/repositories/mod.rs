pub mod day_cache;
pub mod emoncms;
pub mod solar;

pub use day_cache::{CacheKey, DayCache};
pub use emoncms::{EmoncmsClient, TelemetryProvider};
pub use solar::solar_reference_day;
