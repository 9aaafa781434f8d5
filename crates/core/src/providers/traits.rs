use crate::errors::CoreError;
use crate::models::holding::HoldingRecord;
use crate::models::performance::PerformanceView;

/// Source of the raw holding records the aggregators work on.
///
/// The derivation logic depends only on this trait, so the in-memory store
/// can be replaced by a real data source without touching it.
pub trait HoldingRepository: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// All holding records, in the source's own order.
    fn holdings(&self) -> Result<Vec<HoldingRecord>, CoreError>;
}

/// Source of the portfolio/benchmark time series and trailing returns.
pub trait PerformanceSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// The performance view, timeline in chronological order.
    fn performance(&self) -> Result<PerformanceView, CoreError>;
}
