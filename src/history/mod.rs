pub mod analytics;
pub mod record;
pub mod store;

pub use analytics::{monthly_counts, DashboardSnapshot, MonthlyCount, RiskDistribution};
pub use record::{HistoricalRecord, TrendSummary};
pub use store::{HistoryStore, RecordFilter};
