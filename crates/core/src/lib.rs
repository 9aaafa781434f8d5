pub mod client;
pub mod errors;
pub mod math;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use tracing::debug;

use errors::CoreError;
use models::{
    allocation::AllocationView, holding::EnrichedHolding, performance::PerformanceView,
    summary::SummaryView,
};
use providers::{
    sample::{StaticHoldingStore, StaticPerformanceSource},
    traits::{HoldingRepository, PerformanceSource},
};
use services::{
    allocation_service::AllocationService, metrics_service::MetricsService,
    summary_service::SummaryService,
};

/// Main entry point of the analytics backend.
///
/// Owns the holding store and performance source and answers the four
/// read-only dashboard queries. Every query re-reads the store, so the
/// views are always derived from the same, current holdings. Cheap to
/// share behind an `Arc`; nothing here is mutable.
#[must_use]
pub struct PortfolioAnalytics {
    repository: Arc<dyn HoldingRepository>,
    performance_source: Arc<dyn PerformanceSource>,
    metrics_service: MetricsService,
    allocation_service: AllocationService,
    summary_service: SummaryService,
}

impl std::fmt::Debug for PortfolioAnalytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioAnalytics")
            .field("repository", &self.repository.name())
            .field("performance_source", &self.performance_source.name())
            .finish()
    }
}

impl PortfolioAnalytics {
    pub fn new(
        repository: Arc<dyn HoldingRepository>,
        performance_source: Arc<dyn PerformanceSource>,
    ) -> Self {
        Self {
            repository,
            performance_source,
            metrics_service: MetricsService::new(),
            allocation_service: AllocationService::new(),
            summary_service: SummaryService::new(),
        }
    }

    /// Backed by the bundled sample portfolio and performance history.
    pub fn with_sample_data() -> Result<Self, CoreError> {
        Ok(Self::new(
            Arc::new(StaticHoldingStore::sample()?),
            Arc::new(StaticPerformanceSource::sample()?),
        ))
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Every holding with its derived metrics, in store order.
    pub fn holdings(&self) -> Result<Vec<EnrichedHolding>, CoreError> {
        let records = self.repository.holdings()?;
        debug!(source = self.repository.name(), count = records.len(), "holdings read");
        Ok(self.metrics_service.derive_all(&records))
    }

    /// Value distribution by sector and by market cap tier.
    pub fn allocation(&self) -> Result<AllocationView, CoreError> {
        let holdings = self.holdings()?;
        Ok(self.allocation_service.allocation(&holdings))
    }

    /// Historical timeline and trailing returns, served as stored.
    pub fn performance(&self) -> Result<PerformanceView, CoreError> {
        self.performance_source.performance()
    }

    pub fn summary(&self) -> Result<SummaryView, CoreError> {
        let holdings = self.holdings()?;
        Ok(self.summary_service.summarize(&holdings))
    }
}
