use crate::math::{percent_of, round2};
use crate::models::holding::{EnrichedHolding, HoldingRecord, HoldingsItem, MarketCapTier};

/// Derives value and gain/loss metrics for individual holdings.
///
/// The same formulas back the server views and the client-side fallbacks.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Enrich one record with `value`, `gain_loss` and `gain_loss_percent`.
    ///
    /// A zero invested base yields a zero percentage.
    pub fn derive(&self, record: &HoldingRecord) -> EnrichedHolding {
        EnrichedHolding {
            record: record.clone(),
            value: value_of(record.quantity, record.current_price),
            gain_loss: gain_loss_of(record.quantity, record.avg_price, record.current_price),
            gain_loss_percent: gain_loss_percent_of(
                record.quantity,
                record.avg_price,
                record.current_price,
            ),
        }
    }

    /// Enrich every record, preserving store order.
    pub fn derive_all(&self, records: &[HoldingRecord]) -> Vec<EnrichedHolding> {
        records.iter().map(|r| self.derive(r)).collect()
    }

    /// Bring a wire row into the fully-enriched shape.
    ///
    /// Fields supplied by the server are kept as-is; each missing derived
    /// field is computed with the same formula as [`derive`](Self::derive).
    /// Missing sector becomes `""`, missing market cap `Unclassified`.
    pub fn normalize(&self, item: HoldingsItem) -> EnrichedHolding {
        let value = item
            .value
            .unwrap_or_else(|| value_of(item.quantity, item.current_price));
        let gain_loss = item
            .gain_loss
            .unwrap_or_else(|| gain_loss_of(item.quantity, item.avg_price, item.current_price));
        let gain_loss_percent = item.gain_loss_percent.unwrap_or_else(|| {
            gain_loss_percent_of(item.quantity, item.avg_price, item.current_price)
        });

        EnrichedHolding {
            record: HoldingRecord {
                symbol: item.symbol,
                name: item.name,
                quantity: item.quantity,
                avg_price: item.avg_price,
                current_price: item.current_price,
                sector: item.sector.unwrap_or_default(),
                market_cap: item.market_cap.unwrap_or(MarketCapTier::Unclassified),
            },
            value,
            gain_loss,
            gain_loss_percent,
        }
    }

    pub fn normalize_all(&self, items: Vec<HoldingsItem>) -> Vec<EnrichedHolding> {
        items.into_iter().map(|i| self.normalize(i)).collect()
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}

/// `quantity × current_price`, unrounded.
pub fn value_of(quantity: u32, current_price: f64) -> f64 {
    f64::from(quantity) * current_price
}

/// `(current_price − avg_price) × quantity`, unrounded.
pub fn gain_loss_of(quantity: u32, avg_price: f64, current_price: f64) -> f64 {
    (current_price - avg_price) * f64::from(quantity)
}

/// `gain_loss / (avg_price × quantity) × 100`, rounded to 2 decimals.
/// Zero when the invested base is zero.
pub fn gain_loss_percent_of(quantity: u32, avg_price: f64, current_price: f64) -> f64 {
    let invested = avg_price * f64::from(quantity);
    round2(percent_of(
        gain_loss_of(quantity, avg_price, current_price),
        invested,
    ))
}
