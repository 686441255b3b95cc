pub mod averager;
pub mod day_loader;
pub mod warmup;

pub use averager::MonthlyAverager;
pub use day_loader::DayCacheLoader;
pub use warmup::{WarmupScheduler, WarmupSummary};
