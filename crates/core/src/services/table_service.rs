use std::cmp::Ordering;

use crate::models::holding::EnrichedHolding;
use crate::models::table::{SortDirection, SortKey, TableState};

/// Client-side sorting and searching of the holdings table.
///
/// Operates on normalized holdings only; rows are borrowed, never copied.
pub struct TableService;

impl TableService {
    pub fn new() -> Self {
        Self
    }

    /// Rows matching the search, ordered by the active column.
    pub fn view<'a, I>(&self, holdings: I, state: &TableState) -> Vec<&'a EnrichedHolding>
    where
        I: IntoIterator<Item = &'a EnrichedHolding>,
    {
        let filtered = self.filter(holdings, &state.query);
        self.sort(filtered, state.sort_key, state.direction)
    }

    /// Search by case-insensitive substring of symbol, name or sector.
    ///
    /// Keeps the input order. An empty query keeps every row.
    pub fn filter<'a, I>(&self, holdings: I, query: &str) -> Vec<&'a EnrichedHolding>
    where
        I: IntoIterator<Item = &'a EnrichedHolding>,
    {
        if query.is_empty() {
            return holdings.into_iter().collect();
        }
        let q = query.to_lowercase();
        holdings
            .into_iter()
            .filter(|h| {
                h.record.symbol.to_lowercase().contains(&q)
                    || h.record.name.to_lowercase().contains(&q)
                    || h.record.sector.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Stable sort by a single column.
    ///
    /// Rows with equal keys keep their input order in both directions.
    pub fn sort<'a, I>(
        &self,
        holdings: I,
        key: SortKey,
        direction: SortDirection,
    ) -> Vec<&'a EnrichedHolding>
    where
        I: IntoIterator<Item = &'a EnrichedHolding>,
    {
        let mut rows: Vec<&EnrichedHolding> = holdings.into_iter().collect();
        rows.sort_by(|a, b| {
            let ord = compare_by(a, b, key);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        rows
    }
}

impl Default for TableService {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two holdings on one column, ascending.
///
/// Text columns use case-sensitive byte order; numeric columns treat
/// incomparable values (NaN) as equal.
pub fn compare_by(a: &EnrichedHolding, b: &EnrichedHolding, key: SortKey) -> Ordering {
    match key {
        SortKey::Symbol => a.record.symbol.cmp(&b.record.symbol),
        SortKey::Name => a.record.name.cmp(&b.record.name),
        SortKey::Sector => a.record.sector.cmp(&b.record.sector),
        SortKey::Quantity => a.record.quantity.cmp(&b.record.quantity),
        SortKey::AvgPrice => cmp_f64(a.record.avg_price, b.record.avg_price),
        SortKey::CurrentPrice => cmp_f64(a.record.current_price, b.record.current_price),
        SortKey::Value => cmp_f64(a.value, b.value),
        SortKey::GainLoss => cmp_f64(a.gain_loss, b.gain_loss),
        SortKey::GainLossPercent => cmp_f64(a.gain_loss_percent, b.gain_loss_percent),
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
