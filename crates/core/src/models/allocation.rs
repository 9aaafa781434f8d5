use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::chart::AllocationSlice;

/// Value held in one allocation group and its share of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationBucket {
    /// Sum of member holding values, unrounded
    pub value: f64,

    /// `value / total portfolio value × 100`, rounded to 2 decimals
    pub percentage: f64,
}

/// Allocation buckets keyed by group label (sector name or market-cap tier).
///
/// Serializes as a plain JSON object. Keys are kept sorted so output is
/// deterministic; bucket order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationBreakdown(pub BTreeMap<String, AllocationBucket>);

impl AllocationBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, group: &str) -> Option<&AllocationBucket> {
        self.0.get(group)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AllocationBucket)> {
        self.0.iter()
    }

    /// Sum of all bucket percentages (≈ 100 for a non-empty portfolio).
    pub fn total_percentage(&self) -> f64 {
        self.0.values().map(|b| b.percentage).sum()
    }

    /// Chart-ready slices, one per bucket, in key order.
    pub fn slices(&self) -> Vec<AllocationSlice> {
        self.0
            .iter()
            .map(|(name, bucket)| AllocationSlice {
                name: name.clone(),
                value: bucket.value,
                percentage: bucket.percentage,
            })
            .collect()
    }
}

/// Response of the allocation query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationView {
    pub by_sector: AllocationBreakdown,
    pub by_market_cap: AllocationBreakdown,
}
