use std::collections::BTreeMap;

use tracing::debug;

use crate::math::{percent_of, round2};
use crate::models::allocation::{AllocationBreakdown, AllocationBucket, AllocationView};
use crate::models::holding::EnrichedHolding;

/// Groups enriched holdings into allocation buckets.
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Sector and market-cap breakdowns of the same holding set.
    pub fn allocation(&self, holdings: &[EnrichedHolding]) -> AllocationView {
        AllocationView {
            by_sector: self.by_sector(holdings),
            by_market_cap: self.by_market_cap(holdings),
        }
    }

    pub fn by_sector(&self, holdings: &[EnrichedHolding]) -> AllocationBreakdown {
        self.by_group(holdings, sector_key)
    }

    pub fn by_market_cap(&self, holdings: &[EnrichedHolding]) -> AllocationBreakdown {
        self.by_group(holdings, market_cap_key)
    }

    /// Group holdings by `key_fn` and compute each group's share.
    ///
    /// 1. Accumulate `value` per distinct key (one pass)
    /// 2. `percentage = value / total × 100`, rounded to 2 decimals
    ///
    /// A zero total value (including an empty holding set) yields an empty
    /// breakdown.
    pub fn by_group<F>(&self, holdings: &[EnrichedHolding], key_fn: F) -> AllocationBreakdown
    where
        F: Fn(&EnrichedHolding) -> String,
    {
        let total_value: f64 = holdings.iter().map(|h| h.value).sum();
        if total_value == 0.0 {
            debug!(holdings = holdings.len(), "zero total value, no allocation buckets");
            return AllocationBreakdown::new();
        }

        let mut values: BTreeMap<String, f64> = BTreeMap::new();
        for holding in holdings {
            *values.entry(key_fn(holding)).or_insert(0.0) += holding.value;
        }

        let buckets = values
            .into_iter()
            .map(|(group, value)| {
                let percentage = round2(percent_of(value, total_value));
                (group, AllocationBucket { value, percentage })
            })
            .collect();

        AllocationBreakdown(buckets)
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Group key: the holding's sector.
pub fn sector_key(holding: &EnrichedHolding) -> String {
    holding.record.sector.clone()
}

/// Group key: the holding's market-cap tier label.
pub fn market_cap_key(holding: &EnrichedHolding) -> String {
    holding.record.market_cap.label().to_string()
}
