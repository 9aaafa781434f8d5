use std::collections::HashSet;

use tracing::debug;

use crate::math::{percent_of, round_to};
use crate::models::holding::{EnrichedHolding, MarketCapTier};
use crate::models::summary::{Performer, RiskLevel, SummaryView};

/// Large-cap share (in percent) above which the portfolio is `Low` risk.
pub const LOW_RISK_LARGE_CAP_PERCENT: f64 = 70.0;

/// Large-cap share (in percent) below which the portfolio is `High` risk.
pub const HIGH_RISK_LARGE_CAP_PERCENT: f64 = 40.0;

/// Upper bound of the diversification score.
pub const MAX_DIVERSIFICATION_SCORE: f64 = 10.0;

/// Computes the portfolio summary: totals, best/worst performer,
/// diversification score and risk level.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize an enriched holding set.
    ///
    /// - `total_invested` is summed from the records' `avg_price × quantity`,
    ///   never from rounded per-holding fields
    /// - `total_gain_loss_percent` is 0 when nothing is invested
    /// - an empty set produces no performers rather than an error
    pub fn summarize(&self, holdings: &[EnrichedHolding]) -> SummaryView {
        let total_value: f64 = holdings.iter().map(|h| h.value).sum();
        let total_invested: f64 = holdings.iter().map(|h| h.record.invested()).sum();
        let total_gain_loss = total_value - total_invested;
        let total_gain_loss_percent = percent_of(total_gain_loss, total_invested);

        let ranked = rank_by_performance(holdings);
        let top_performer = ranked.first().map(|h| performer(h));
        let worst_performer = ranked.last().map(|h| performer(h));

        let large_cap_percent = percent_of(
            holdings
                .iter()
                .filter(|h| h.record.market_cap == MarketCapTier::Large)
                .map(|h| h.value)
                .sum(),
            total_value,
        );
        let risk_level = risk_level_for(large_cap_percent);

        debug!(
            holdings = holdings.len(),
            total_value, large_cap_percent, %risk_level, "portfolio summarized"
        );

        SummaryView {
            total_value,
            total_invested,
            total_gain_loss,
            total_gain_loss_percent,
            top_performer,
            worst_performer,
            diversification_score: diversification_score(holdings),
            risk_level,
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}

/// Holdings ordered by `gain_loss_percent`, best first.
///
/// The sort is stable: holdings with equal percentages keep their input
/// order, so the top performer is the first of the tied leaders and the
/// worst performer is the last of the tied laggards.
pub fn rank_by_performance(holdings: &[EnrichedHolding]) -> Vec<&EnrichedHolding> {
    let mut ranked: Vec<&EnrichedHolding> = holdings.iter().collect();
    ranked.sort_by(|a, b| b.gain_loss_percent.total_cmp(&a.gain_loss_percent));
    ranked
}

/// `distinct sectors / holdings × 10`, rounded to 1 decimal, clamped to `[0, 10]`.
///
/// A deliberately crude heuristic, not a concentration index.
pub fn diversification_score(holdings: &[EnrichedHolding]) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }
    let sectors: HashSet<&str> = holdings.iter().map(|h| h.record.sector.as_str()).collect();
    let score = sectors.len() as f64 / holdings.len() as f64 * MAX_DIVERSIFICATION_SCORE;
    round_to(score, 1).clamp(0.0, MAX_DIVERSIFICATION_SCORE)
}

/// `> 70%` large cap is `Low`, `< 40%` is `High`, anything in between
/// (boundaries included) is `Moderate`.
pub fn risk_level_for(large_cap_percent: f64) -> RiskLevel {
    if large_cap_percent > LOW_RISK_LARGE_CAP_PERCENT {
        RiskLevel::Low
    } else if large_cap_percent < HIGH_RISK_LARGE_CAP_PERCENT {
        RiskLevel::High
    } else {
        RiskLevel::Moderate
    }
}

fn performer(holding: &EnrichedHolding) -> Performer {
    Performer {
        symbol: holding.record.symbol.clone(),
        name: holding.record.name.clone(),
        gain_percent: holding.gain_loss_percent,
    }
}
