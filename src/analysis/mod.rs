mod stats;

pub use stats::{summarize, FieldStats, MarketSummary, RoomsBreakdown};
