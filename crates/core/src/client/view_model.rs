use tracing::{debug, warn};

use crate::client::api::PortfolioApi;
use crate::client::format::format_percent;
use crate::errors::CoreError;
use crate::math::percent_of;
use crate::models::chart::{AllocationSlice, ChartSeries};
use crate::models::dashboard::{DashboardData, Overview, PerformerCard, ReturnsCard, RiskCard};
use crate::models::holding::EnrichedHolding;
use crate::models::performance::TrailingReturns;
use crate::models::summary::Performer;
use crate::models::table::{SortKey, TableState};
use crate::providers::demo::DemoFixture;
use crate::services::export_service::ExportService;
use crate::services::metrics_service::MetricsService;
use crate::services::table_service::TableService;

/// Placeholder shown for a missing value.
pub const PLACEHOLDER: &str = "—";

/// Error message used when a failed load carries no text of its own.
pub const DEFAULT_LOAD_ERROR: &str = "Failed to load data.";

/// Reason export is unavailable for an empty table.
pub const NO_ROWS_TO_EXPORT: &str = "No rows to export";

/// Lifecycle of a dashboard load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    /// Requests in flight
    Loading,
    /// All four queries succeeded
    Success,
    /// At least one query failed; carries the message to display
    Error(String),
}

/// Client-side state of the dashboard page.
///
/// Loads the four views concurrently and only applies them when all four
/// succeed. `load` takes `&mut self`, so a retry cannot start while a
/// previous load is still pending on the same view model.
pub struct DashboardViewModel {
    state: LoadState,
    data: DashboardData,
    table: TableState,
    metrics_service: MetricsService,
    table_service: TableService,
    export_service: ExportService,
}

impl std::fmt::Debug for DashboardViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardViewModel")
            .field("state", &self.state)
            .field("holdings", &self.data.holdings.len())
            .field("table", &self.table)
            .finish()
    }
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            data: DashboardData::default(),
            table: TableState::default(),
            metrics_service: MetricsService::new(),
            table_service: TableService::new(),
            export_service: ExportService::new(),
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Fetch holdings, allocation, performance and summary concurrently.
    ///
    /// All-or-nothing: on success every view is replaced and the state
    /// becomes `Success`; if any request fails the state becomes `Error`
    /// and nothing from this attempt is applied. Call again to retry.
    pub async fn load(&mut self, api: &dyn PortfolioApi) -> Result<(), CoreError> {
        self.state = LoadState::Loading;

        let joined = futures::try_join!(
            api.fetch_holdings(),
            api.fetch_allocation(),
            api.fetch_performance(),
            api.fetch_summary(),
        );

        match joined {
            Ok((holdings, allocation, performance, summary)) => {
                let data = DashboardData {
                    holdings: self.metrics_service.normalize_all(holdings),
                    allocation: Some(allocation),
                    performance: Some(performance),
                    summary: Some(summary),
                };
                debug!(holdings = data.holdings.len(), "dashboard loaded");
                self.hydrate(data);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "dashboard load failed");
                self.state = LoadState::Error(if message.is_empty() {
                    DEFAULT_LOAD_ERROR.to_string()
                } else {
                    message
                });
                Err(e)
            }
        }
    }

    /// Show data obtained elsewhere (prefetched or cached) as a successful load.
    pub fn hydrate(&mut self, data: DashboardData) {
        self.data = data;
        self.state = LoadState::Success;
    }

    /// Replace everything with the static demo data and show it.
    pub fn use_demo_data(&mut self) -> Result<(), CoreError> {
        self.hydrate(DemoFixture::load()?);
        Ok(())
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// True until the first load settles (`Idle` or `Loading`).
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Idle | LoadState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Data to render. Only available in the `Success` state.
    pub fn data(&self) -> Option<&DashboardData> {
        match self.state {
            LoadState::Success => Some(&self.data),
            _ => None,
        }
    }

    // ── Holdings table ──────────────────────────────────────────────

    pub fn table_state(&self) -> &TableState {
        &self.table
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.table.set_query(query);
    }

    /// Header click on `key`.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.table.toggle(key);
    }

    /// Rows of the holdings table: searched, then sorted.
    pub fn visible_holdings(&self) -> Vec<&EnrichedHolding> {
        self.table_service.view(&self.data.holdings, &self.table)
    }

    /// False when search leaves no rows.
    pub fn can_export(&self) -> bool {
        !self.visible_holdings().is_empty()
    }

    /// CSV of exactly the rows currently visible, in display order.
    /// Refuses an empty table.
    pub fn export_visible(&self) -> Result<String, CoreError> {
        let rows = self.visible_holdings();
        if rows.is_empty() {
            return Err(CoreError::Export(NO_ROWS_TO_EXPORT.to_string()));
        }
        self.export_service.export(rows)
    }

    // ── Overview & cards ────────────────────────────────────────────

    /// Headline totals. Summary figures win; without a summary they are
    /// recomputed from the holdings.
    pub fn overview(&self) -> Overview {
        let holdings = &self.data.holdings;
        let summary = self.data.summary.as_ref();

        let total_value = summary
            .map(|s| s.total_value)
            .unwrap_or_else(|| holdings.iter().map(|h| h.value).sum());
        let total_invested = summary
            .map(|s| s.total_invested)
            .unwrap_or_else(|| holdings.iter().map(|h| h.record.invested()).sum());
        let total_gain_loss = summary
            .map(|s| s.total_gain_loss)
            .unwrap_or(total_value - total_invested);
        let gain_loss_percent = summary
            .map(|s| s.total_gain_loss_percent)
            .unwrap_or_else(|| percent_of(total_gain_loss, total_invested));

        Overview {
            total_holdings: holdings.len(),
            total_value,
            total_invested,
            total_gain_loss,
            gain_loss_percent,
        }
    }

    pub fn top_performer_card(&self) -> PerformerCard {
        performer_card(
            self.data
                .summary
                .as_ref()
                .and_then(|s| s.top_performer.as_ref()),
        )
    }

    pub fn worst_performer_card(&self) -> PerformerCard {
        performer_card(
            self.data
                .summary
                .as_ref()
                .and_then(|s| s.worst_performer.as_ref()),
        )
    }

    pub fn risk_card(&self) -> RiskCard {
        match &self.data.summary {
            Some(summary) => RiskCard {
                diversification: format!("{:.1} / 10", summary.diversification_score),
                risk_level: summary.risk_level.to_string(),
            },
            None => RiskCard {
                diversification: format!("{PLACEHOLDER} / 10"),
                risk_level: PLACEHOLDER.to_string(),
            },
        }
    }

    /// Portfolio, Nifty 50 and Gold trailing returns. All zero without
    /// performance data.
    pub fn returns_cards(&self) -> Vec<ReturnsCard> {
        let returns = self
            .data
            .performance
            .as_ref()
            .map(|p| p.returns)
            .unwrap_or_default();

        vec![
            returns_card("Portfolio", returns.portfolio),
            returns_card("Nifty 50", returns.benchmark_nifty),
            returns_card("Gold", returns.benchmark_gold),
        ]
    }

    // ── Charts ──────────────────────────────────────────────────────

    pub fn sector_slices(&self) -> Vec<AllocationSlice> {
        self.data
            .allocation
            .as_ref()
            .map(|a| a.by_sector.slices())
            .unwrap_or_default()
    }

    pub fn market_cap_slices(&self) -> Vec<AllocationSlice> {
        self.data
            .allocation
            .as_ref()
            .map(|a| a.by_market_cap.slices())
            .unwrap_or_default()
    }

    pub fn performance_series(&self) -> Vec<ChartSeries> {
        self.data
            .performance
            .as_ref()
            .map(|p| p.series())
            .unwrap_or_default()
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn performer_card(performer: Option<&Performer>) -> PerformerCard {
    match performer {
        Some(p) => PerformerCard {
            name: p.name.clone(),
            symbol: p.symbol.clone(),
            gain: format_percent(p.gain_percent),
        },
        None => PerformerCard {
            name: PLACEHOLDER.to_string(),
            symbol: String::new(),
            gain: PLACEHOLDER.to_string(),
        },
    }
}

fn returns_card(title: &str, returns: TrailingReturns) -> ReturnsCard {
    ReturnsCard {
        title: title.to_string(),
        one_month: returns.one_month,
        three_months: returns.three_months,
        one_year: returns.one_year,
    }
}
