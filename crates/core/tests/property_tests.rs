// ═══════════════════════════════════════════════════════════════════
// Property Tests — derivation, allocation, summary, table, CSV
// ═══════════════════════════════════════════════════════════════════

use proptest::prelude::*;

use wealth_dashboard_core::math::round2;
use wealth_dashboard_core::models::holding::{EnrichedHolding, HoldingRecord, MarketCapTier};
use wealth_dashboard_core::models::table::{SortDirection, SortKey};
use wealth_dashboard_core::services::allocation_service::AllocationService;
use wealth_dashboard_core::services::export_service::{ExportService, UTF8_BOM};
use wealth_dashboard_core::services::metrics_service::MetricsService;
use wealth_dashboard_core::services::summary_service::{
    SummaryService, MAX_DIVERSIFICATION_SCORE,
};
use wealth_dashboard_core::services::table_service::{compare_by, TableService};

// ═══════════════════════════════════════════════════════════════════
// Strategies
// ═══════════════════════════════════════════════════════════════════

fn arb_tier() -> impl Strategy<Value = MarketCapTier> {
    prop_oneof![
        Just(MarketCapTier::Large),
        Just(MarketCapTier::Mid),
        Just(MarketCapTier::Small),
    ]
}

fn arb_record() -> impl Strategy<Value = HoldingRecord> {
    (
        "[A-Z]{1,8}",
        // printable ASCII, so names may contain quotes and commas
        "[ -~]{0,24}",
        1u32..10_000,
        0.01f64..10_000.0,
        0.0f64..10_000.0,
        prop::sample::select(vec!["Technology", "Banking", "Energy", "Retail", "Telecom"]),
        arb_tier(),
    )
        .prop_map(|(symbol, name, quantity, avg_price, current_price, sector, tier)| {
            HoldingRecord::new(symbol, name, quantity, avg_price, current_price, sector, tier)
        })
}

fn arb_holdings(max: usize) -> impl Strategy<Value = Vec<EnrichedHolding>> {
    prop::collection::vec(arb_record(), 0..=max)
        .prop_map(|records| MetricsService::new().derive_all(&records))
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(vec![
        SortKey::Symbol,
        SortKey::Name,
        SortKey::Sector,
        SortKey::Quantity,
        SortKey::AvgPrice,
        SortKey::CurrentPrice,
        SortKey::Value,
        SortKey::GainLoss,
        SortKey::GainLossPercent,
    ])
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

fn addresses(rows: &[&EnrichedHolding]) -> Vec<*const EnrichedHolding> {
    rows.iter().map(|h| *h as *const EnrichedHolding).collect()
}

// ═══════════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ── Metrics ─────────────────────────────────────────────────────

    #[test]
    fn prop_value_is_exact(record in arb_record()) {
        let h = MetricsService::new().derive(&record);
        prop_assert_eq!(h.value, f64::from(record.quantity) * record.current_price);
    }

    #[test]
    fn prop_gain_loss_percent_matches_price_change(record in arb_record()) {
        let h = MetricsService::new().derive(&record);
        let expected = round2((record.current_price - record.avg_price) / record.avg_price * 100.0);
        prop_assert!(
            (h.gain_loss_percent - expected).abs() <= 0.01 + 1e-9,
            "{} vs {}", h.gain_loss_percent, expected
        );
        prop_assert!(h.gain_loss_percent.is_finite());
    }

    // ── Allocation ──────────────────────────────────────────────────

    #[test]
    fn prop_allocation_percentages_sum_to_100(holdings in arb_holdings(20)) {
        let total: f64 = holdings.iter().map(|h| h.value).sum();
        let view = AllocationService::new().allocation(&holdings);

        if total == 0.0 {
            prop_assert!(view.by_sector.is_empty());
            prop_assert!(view.by_market_cap.is_empty());
        } else {
            for breakdown in [&view.by_sector, &view.by_market_cap] {
                let eps = 0.01 * breakdown.len() as f64 + 1e-9;
                prop_assert!((breakdown.total_percentage() - 100.0).abs() <= eps);

                let bucket_total: f64 = breakdown.iter().map(|(_, b)| b.value).sum();
                prop_assert!((bucket_total - total).abs() <= total * 1e-9);
            }
        }
    }

    // ── Summary ─────────────────────────────────────────────────────

    #[test]
    fn prop_summary_gain_loss_is_exact(holdings in arb_holdings(20)) {
        let summary = SummaryService::new().summarize(&holdings);
        prop_assert_eq!(summary.total_gain_loss, summary.total_value - summary.total_invested);
        prop_assert_eq!(summary.top_performer.is_some(), !holdings.is_empty());
        prop_assert_eq!(summary.worst_performer.is_some(), !holdings.is_empty());
    }

    #[test]
    fn prop_diversification_in_range(holdings in arb_holdings(20)) {
        let score = SummaryService::new().summarize(&holdings).diversification_score;
        prop_assert!((0.0..=MAX_DIVERSIFICATION_SCORE).contains(&score));
    }

    #[test]
    fn prop_top_is_max_and_worst_is_min(holdings in arb_holdings(20)) {
        prop_assume!(!holdings.is_empty());
        let summary = SummaryService::new().summarize(&holdings);

        let max = holdings.iter().map(|h| h.gain_loss_percent).fold(f64::MIN, f64::max);
        let min = holdings.iter().map(|h| h.gain_loss_percent).fold(f64::MAX, f64::min);
        prop_assert_eq!(summary.top_performer.unwrap().gain_percent, max);
        prop_assert_eq!(summary.worst_performer.unwrap().gain_percent, min);
    }

    // ── Table ───────────────────────────────────────────────────────

    #[test]
    fn prop_sort_is_ordered(
        holdings in arb_holdings(20),
        key in arb_sort_key(),
        direction in arb_direction()
    ) {
        let rows = TableService::new().sort(&holdings, key, direction);
        prop_assert_eq!(rows.len(), holdings.len());

        for pair in rows.windows(2) {
            let ord = compare_by(pair[0], pair[1], key);
            match direction {
                SortDirection::Ascending => prop_assert!(ord.is_le()),
                SortDirection::Descending => prop_assert!(ord.is_ge()),
            }
        }
    }

    #[test]
    fn prop_sort_is_stable_across_flips(
        holdings in arb_holdings(20),
        key in arb_sort_key(),
        direction in arb_direction()
    ) {
        let svc = TableService::new();
        let once = svc.sort(&holdings, key, direction);
        let flipped = svc.sort(&holdings, key, direction.flipped());
        let back = svc.sort(flipped, key, direction);

        prop_assert_eq!(addresses(&once), addresses(&back));
    }

    #[test]
    fn prop_filter_is_idempotent_subsequence(
        holdings in arb_holdings(20),
        query in "[a-zA-Z]{0,3}"
    ) {
        let svc = TableService::new();
        let once = svc.filter(&holdings, &query);
        let twice = svc.filter(once.iter().copied(), &query);
        prop_assert_eq!(addresses(&once), addresses(&twice));

        // relative order preserved
        let positions: Vec<usize> = once
            .iter()
            .map(|r| holdings.iter().position(|h| std::ptr::eq(h, *r)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_empty_query_keeps_all(holdings in arb_holdings(20)) {
        let rows = TableService::new().filter(&holdings, "");
        let all: Vec<&EnrichedHolding> = holdings.iter().collect();
        prop_assert_eq!(addresses(&rows), addresses(&all));
    }

    // ── CSV ─────────────────────────────────────────────────────────

    #[test]
    fn prop_csv_round_trip(holdings in arb_holdings(15)) {
        let text = ExportService::new().export(&holdings).unwrap();
        prop_assert!(text.starts_with(UTF8_BOM));
        let body = text.strip_prefix(UTF8_BOM).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(body.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        prop_assert_eq!(rows.len(), holdings.len());

        for (row, h) in rows.iter().zip(&holdings) {
            prop_assert_eq!(row.len(), 10);
            prop_assert_eq!(&row[0], h.record.symbol.as_str());
            prop_assert_eq!(&row[1], h.record.name.as_str());
            prop_assert_eq!(&row[2], h.record.sector.as_str());
            prop_assert_eq!(&row[3], h.record.market_cap.label());
            prop_assert_eq!(row[4].parse::<u32>().unwrap(), h.record.quantity);
            prop_assert_eq!(row[7].parse::<f64>().unwrap(), round2(h.value));
        }
    }
}
