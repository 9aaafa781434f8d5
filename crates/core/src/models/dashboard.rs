use serde::{Deserialize, Serialize};

use super::allocation::AllocationView;
use super::holding::EnrichedHolding;
use super::performance::PerformanceView;
use super::summary::SummaryView;

/// Everything the dashboard renders, as fetched from the four queries.
///
/// Holdings are already normalized: every row carries its derived fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub holdings: Vec<EnrichedHolding>,

    /// `None` until a load succeeds
    pub allocation: Option<AllocationView>,

    /// `None` until a load succeeds
    pub performance: Option<PerformanceView>,

    /// `None` until a load succeeds
    pub summary: Option<SummaryView>,
}

/// Headline numbers of the overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub total_holdings: usize,
    pub total_value: f64,
    pub total_invested: f64,
    pub total_gain_loss: f64,
    pub gain_loss_percent: f64,
}

/// Display strings for a best/worst performer card.
///
/// Missing performers render as `"—"` with an empty symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformerCard {
    pub name: String,
    pub symbol: String,
    pub gain: String,
}

/// Display strings for the risk and diversification card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCard {
    /// e.g. "7.7 / 10", or "— / 10"
    pub diversification: String,
    /// "Low" / "Moderate" / "High", or "—"
    pub risk_level: String,
}

/// Trailing returns of one series, as shown under the performance chart.
/// Missing periods are 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnsCard {
    /// "Portfolio", "Nifty 50" or "Gold"
    pub title: String,
    pub one_month: f64,
    pub three_months: f64,
    pub one_year: f64,
}
