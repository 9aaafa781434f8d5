use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One slice of an allocation pie chart.
///
/// The core computes the numbers; the frontend only renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Group label (sector or market-cap tier)
    pub name: String,

    /// Value attributed to the group
    pub value: f64,

    /// Share of the total portfolio value, in percent
    pub percentage: f64,
}

/// A single point of a line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A labelled line of the performance comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label (e.g., "Portfolio", "Nifty 50", "Gold")
    pub label: String,

    /// Points in chronological order
    pub points: Vec<ChartPoint>,
}
