pub mod day_type;
pub mod feed;
pub mod sample;

pub use day_type::DayTypeFilter;
pub use feed::{FeedType, UnknownFeed};
pub use sample::{Sample, SampleSeries, SLOTS_PER_DAY};
