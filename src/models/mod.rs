pub mod stats;
pub mod trade;

pub use stats::{ClosedAggregates, LastTrade, ModelStats, TodayAggregates};
pub use trade::TradeSummary;
