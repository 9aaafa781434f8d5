use serde::{Deserialize, Serialize};

use crate::math::serialize_round2;

/// Coarse risk tier derived from large-cap concentration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    /// Missing or unrecognized level in a decoded response
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Unknown => write!(f, "—"),
        }
    }
}

/// Best or worst performing holding, as shown on the summary cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    pub symbol: String,
    pub name: String,
    /// The holding's `gain_loss_percent`
    pub gain_percent: f64,
}

/// Response of the summary query.
///
/// Totals are kept unrounded in memory so that
/// `total_gain_loss == total_value - total_invested` holds exactly;
/// they are rounded to 2 decimals only when serialized. Fields missing
/// from a decoded response fall back to 0, `None` or [`RiskLevel::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    #[serde(default, serialize_with = "serialize_round2")]
    pub total_value: f64,

    #[serde(default, serialize_with = "serialize_round2")]
    pub total_invested: f64,

    #[serde(default, serialize_with = "serialize_round2")]
    pub total_gain_loss: f64,

    #[serde(default, serialize_with = "serialize_round2")]
    pub total_gain_loss_percent: f64,

    /// `None` when the portfolio has no holdings
    #[serde(default)]
    pub top_performer: Option<Performer>,

    /// `None` when the portfolio has no holdings
    #[serde(default)]
    pub worst_performer: Option<Performer>,

    /// Distinct sectors per holding × 10, rounded to 1 decimal, in `[0, 10]`
    #[serde(default)]
    pub diversification_score: f64,

    #[serde(default)]
    pub risk_level: RiskLevel,
}

impl SummaryView {
    /// False for the explicit "no holdings" summary.
    pub fn has_holdings(&self) -> bool {
        self.top_performer.is_some()
    }
}
