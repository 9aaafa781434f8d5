use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::chart::{ChartPoint, ChartSeries};

/// Portfolio and benchmark values on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub date: NaiveDate,
    pub portfolio: f64,
    /// Nifty 50 index level
    pub benchmark_nifty: f64,
    /// Gold price
    pub benchmark_gold: f64,
}

/// Trailing returns of one series, in percent. Missing periods read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailingReturns {
    #[serde(rename = "1month")]
    pub one_month: f64,
    #[serde(rename = "3months")]
    pub three_months: f64,
    #[serde(rename = "1year")]
    pub one_year: f64,
}

impl TrailingReturns {
    pub fn new(one_month: f64, three_months: f64, one_year: f64) -> Self {
        Self {
            one_month,
            three_months,
            one_year,
        }
    }
}

/// Trailing returns for the portfolio and both benchmarks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceReturns {
    pub portfolio: TrailingReturns,
    #[serde(alias = "nifty50")]
    pub benchmark_nifty: TrailingReturns,
    #[serde(alias = "gold")]
    pub benchmark_gold: TrailingReturns,
}

/// Response of the performance query. Supplied as-is by the data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceView {
    /// Points in chronological order
    #[serde(default)]
    pub timeline: Vec<PerformancePoint>,
    #[serde(default)]
    pub returns: PerformanceReturns,
}

impl PerformanceView {
    /// True when every timeline date is strictly after the previous one.
    pub fn is_chronological(&self) -> bool {
        self.timeline.windows(2).all(|w| w[0].date < w[1].date)
    }

    /// The three lines of the comparison chart: Portfolio, Nifty 50, Gold.
    pub fn series(&self) -> Vec<ChartSeries> {
        vec![
            self.line("Portfolio", |p| p.portfolio),
            self.line("Nifty 50", |p| p.benchmark_nifty),
            self.line("Gold", |p| p.benchmark_gold),
        ]
    }

    fn line(&self, label: &str, pick: fn(&PerformancePoint) -> f64) -> ChartSeries {
        ChartSeries {
            label: label.to_string(),
            points: self
                .timeline
                .iter()
                .map(|p| ChartPoint {
                    date: p.date,
                    value: pick(p),
                })
                .collect(),
        }
    }

    /// Date range covered by the timeline, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.timeline.first()?.date, self.timeline.last()?.date))
    }
}
