use std::collections::BTreeMap;

use crate::errors::CoreError;
use crate::models::allocation::{AllocationBreakdown, AllocationBucket, AllocationView};
use crate::models::dashboard::DashboardData;
use crate::models::holding::{EnrichedHolding, HoldingRecord, MarketCapTier};
use crate::models::performance::{
    PerformancePoint, PerformanceReturns, PerformanceView, TrailingReturns,
};
use crate::models::summary::{Performer, RiskLevel, SummaryView};
use super::sample::parse_date;

/// Static demo data shown when the user opts out of a failed load.
///
/// The figures are illustrative and intentionally not derived from each
/// other (the allocation, for instance, includes a Healthcare sector that
/// has no holding). Nothing here is recomputed.
pub struct DemoFixture;

impl DemoFixture {
    pub fn load() -> Result<DashboardData, CoreError> {
        Ok(DashboardData {
            holdings: Self::holdings(),
            allocation: Some(Self::allocation()),
            performance: Some(Self::performance()?),
            summary: Some(Self::summary()),
        })
    }

    fn holdings() -> Vec<EnrichedHolding> {
        let row = |symbol: &str,
                   name: &str,
                   quantity: u32,
                   avg_price: f64,
                   current_price: f64,
                   sector: &str,
                   value: f64,
                   gain_loss: f64,
                   gain_loss_percent: f64| EnrichedHolding {
            record: HoldingRecord::new(
                symbol,
                name,
                quantity,
                avg_price,
                current_price,
                sector,
                MarketCapTier::Large,
            ),
            value,
            gain_loss,
            gain_loss_percent,
        };

        vec![
            row("RELIANCE", "Reliance Industries Ltd", 50, 2450.0, 2680.5, "Energy", 134_025.0, 11_525.0, 9.4),
            row("INFY", "Infosys Limited", 100, 1800.0, 2010.75, "Technology", 201_075.0, 21_075.0, 11.7),
            row("TCS", "Tata Consultancy Services", 40, 3300.0, 3650.0, "Technology", 146_000.0, 14_000.0, 10.6),
            row("HDFC", "HDFC Bank", 80, 1550.0, 1520.0, "Banking", 121_600.0, -2_400.0, -2.0),
        ]
    }

    fn allocation() -> AllocationView {
        AllocationView {
            by_sector: breakdown(&[
                ("Technology", 250_000.0, 35.7),
                ("Banking", 180_000.0, 25.7),
                ("Energy", 134_025.0, 19.1),
                ("Healthcare", 136_000.0, 19.4),
            ]),
            by_market_cap: breakdown(&[
                ("Large", 455_000.0, 65.0),
                ("Mid", 175_000.0, 25.0),
                ("Small", 70_000.0, 10.0),
            ]),
        }
    }

    fn performance() -> Result<PerformanceView, CoreError> {
        let point = |date: &str,
                     portfolio: f64,
                     nifty: f64,
                     gold: f64|
         -> Result<PerformancePoint, CoreError> {
            Ok(PerformancePoint {
                date: parse_date(date)?,
                portfolio,
                benchmark_nifty: nifty,
                benchmark_gold: gold,
            })
        };

        Ok(PerformanceView {
            timeline: vec![
                point("2024-01-01", 650_000.0, 21_000.0, 62_000.0)?,
                point("2024-03-01", 680_000.0, 22_100.0, 64_500.0)?,
                point("2024-06-01", 700_000.0, 23_500.0, 68_000.0)?,
            ],
            returns: PerformanceReturns {
                portfolio: TrailingReturns::new(2.3, 8.1, 15.7),
                benchmark_nifty: TrailingReturns::new(1.8, 6.2, 12.4),
                benchmark_gold: TrailingReturns::new(-0.5, 4.1, 8.9),
            },
        })
    }

    fn summary() -> SummaryView {
        SummaryView {
            total_value: 700_000.0,
            total_invested: 600_000.0,
            total_gain_loss: 100_000.0,
            total_gain_loss_percent: 16.67,
            top_performer: Some(Performer {
                symbol: "INFY".into(),
                name: "Infosys Limited".into(),
                gain_percent: 28.5,
            }),
            worst_performer: Some(Performer {
                symbol: "HDFC".into(),
                name: "HDFC Bank".into(),
                gain_percent: -2.1,
            }),
            diversification_score: 8.2,
            risk_level: RiskLevel::Moderate,
        }
    }
}

fn breakdown(entries: &[(&str, f64, f64)]) -> AllocationBreakdown {
    AllocationBreakdown(
        entries
            .iter()
            .map(|&(name, value, percentage)| (name.to_string(), AllocationBucket { value, percentage }))
            .collect::<BTreeMap<_, _>>(),
    )
}
