pub mod pnl;
pub mod series;
pub mod stats;
pub mod weekly;

pub use pnl::{normalized_pnl, round2};
pub use series::{monthly_series, MonthlySeriesPoint};
pub use stats::{compute_statistics, SummaryStatistics};
pub use weekly::{group_by_week, group_by_week_in, week_label, week_start, WeekBucket};
