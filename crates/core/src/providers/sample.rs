use std::collections::HashSet;

use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::holding::{HoldingRecord, MarketCapTier};
use crate::models::performance::{
    PerformancePoint, PerformanceReturns, PerformanceView, TrailingReturns,
};
use super::traits::{HoldingRepository, PerformanceSource};

/// Fixed, read-only set of holdings kept in memory for the process lifetime.
///
/// Records are validated once at construction:
/// - symbol non-empty and unique
/// - quantity > 0, avg price > 0, current price ≥ 0 (all finite)
/// - market cap is Large, Mid or Small
#[derive(Debug, Clone)]
pub struct StaticHoldingStore {
    holdings: Vec<HoldingRecord>,
}

impl StaticHoldingStore {
    pub fn new(holdings: Vec<HoldingRecord>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for record in &holdings {
            validate_record(record)?;
            if !seen.insert(record.symbol.as_str()) {
                return Err(CoreError::DuplicateSymbol(record.symbol.clone()));
            }
        }
        Ok(Self { holdings })
    }

    /// The bundled sample portfolio of 13 Indian equities.
    pub fn sample() -> Result<Self, CoreError> {
        use MarketCapTier::{Large, Mid, Small};

        Self::new(vec![
            HoldingRecord::new("RELIANCE", "Reliance Industries Ltd", 50, 2450.00, 2830.50, "Energy", Large),
            HoldingRecord::new("TCS", "Tata Consultancy Services", 75, 3200.00, 3850.25, "Technology", Large),
            HoldingRecord::new("HDFCBANK", "HDFC Bank Ltd", 100, 1500.00, 1475.80, "Banking", Large),
            HoldingRecord::new("INFY", "Infosys Limited", 120, 1450.00, 1650.75, "Technology", Large),
            HoldingRecord::new("ICICIBANK", "ICICI Bank Ltd", 150, 900.00, 1150.45, "Banking", Large),
            HoldingRecord::new("BHARTIARTL", "Bharti Airtel Ltd", 200, 850.00, 1215.90, "Telecom", Large),
            HoldingRecord::new("SBIN", "State Bank of India", 250, 500.00, 830.60, "Banking", Large),
            HoldingRecord::new("BAJFINANCE", "Bajaj Finance Ltd", 40, 7000.00, 7250.00, "Financial Services", Large),
            HoldingRecord::new("DMART", "Avenue Supermarts Ltd", 60, 3800.00, 4850.50, "Retail", Mid),
            HoldingRecord::new("TATAMOTORS", "Tata Motors Ltd", 300, 650.00, 980.20, "Automobile", Large),
            HoldingRecord::new("ZOMATO", "Zomato Ltd", 500, 120.00, 185.75, "Technology", Mid),
            HoldingRecord::new("IRCTC", "Indian Railway Catering & Tourism Corp Ltd", 100, 750.00, 1010.30, "Travel", Mid),
            HoldingRecord::new("NYKAA", "FSN E-Commerce Ventures Ltd", 400, 200.00, 170.15, "Retail", Small),
        ])
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

impl HoldingRepository for StaticHoldingStore {
    fn name(&self) -> &str {
        "StaticHoldingStore"
    }

    fn holdings(&self) -> Result<Vec<HoldingRecord>, CoreError> {
        Ok(self.holdings.clone())
    }
}

fn validate_record(record: &HoldingRecord) -> Result<(), CoreError> {
    if record.symbol.trim().is_empty() {
        return Err(CoreError::Validation("Holding symbol must not be empty".into()));
    }
    if record.quantity == 0 {
        return Err(CoreError::Validation(format!(
            "Quantity of {} must be positive",
            record.symbol
        )));
    }
    if !record.avg_price.is_finite() || record.avg_price <= 0.0 {
        return Err(CoreError::Validation(format!(
            "Average price of {} must be positive, got {}",
            record.symbol, record.avg_price
        )));
    }
    if !record.current_price.is_finite() || record.current_price < 0.0 {
        return Err(CoreError::Validation(format!(
            "Current price of {} must not be negative, got {}",
            record.symbol, record.current_price
        )));
    }
    if record.market_cap == MarketCapTier::Unclassified {
        return Err(CoreError::Validation(format!(
            "Market cap of {} must be Large, Mid or Small",
            record.symbol
        )));
    }
    Ok(())
}

/// Fixed performance history served as-is.
#[derive(Debug, Clone)]
pub struct StaticPerformanceSource {
    view: PerformanceView,
}

impl StaticPerformanceSource {
    /// Rejects a timeline that is not strictly chronological.
    pub fn new(view: PerformanceView) -> Result<Self, CoreError> {
        if !view.is_chronological() {
            return Err(CoreError::Validation(
                "Performance timeline must be in chronological order".into(),
            ));
        }
        Ok(Self { view })
    }

    /// Monthly portfolio value against Nifty 50 and gold, Jan–Jul 2024.
    pub fn sample() -> Result<Self, CoreError> {
        let rows: [(&str, f64, f64, f64); 7] = [
            ("2024-01-01", 1_850_000.0, 21_700.0, 63_000.0),
            ("2024-02-01", 1_950_000.0, 22_000.0, 64_000.0),
            ("2024-03-01", 2_100_000.0, 22_300.0, 66_500.0),
            ("2024-04-01", 2_050_000.0, 22_600.0, 71_000.0),
            ("2024-05-01", 2_200_000.0, 22_500.0, 72_000.0),
            ("2024-06-01", 2_350_000.0, 23_300.0, 71_500.0),
            ("2024-07-01", 2_450_000.0, 24_000.0, 72_500.0),
        ];

        let timeline = rows
            .iter()
            .map(|(date, portfolio, nifty, gold)| {
                Ok(PerformancePoint {
                    date: parse_date(date)?,
                    portfolio: *portfolio,
                    benchmark_nifty: *nifty,
                    benchmark_gold: *gold,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Self::new(PerformanceView {
            timeline,
            returns: PerformanceReturns {
                portfolio: TrailingReturns::new(4.2, 16.6, 25.5),
                benchmark_nifty: TrailingReturns::new(3.0, 7.5, 14.8),
                benchmark_gold: TrailingReturns::new(1.4, 2.1, 15.2),
            },
        })
    }
}

impl PerformanceSource for StaticPerformanceSource {
    fn name(&self) -> &str {
        "StaticPerformanceSource"
    }

    fn performance(&self) -> Result<PerformanceView, CoreError> {
        Ok(self.view.clone())
    }
}

/// Parse a `YYYY-MM-DD` date.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| CoreError::Validation(format!("Invalid date '{s}': {e}")))
}
