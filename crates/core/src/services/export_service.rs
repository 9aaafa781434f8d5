use chrono::NaiveDateTime;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use crate::errors::CoreError;
use crate::math::round2;
use crate::models::holding::{EnrichedHolding, HoldingsItem};
use crate::services::metrics_service::MetricsService;

/// Column labels of the holdings CSV, in output order.
pub const CSV_HEADERS: [&str; 10] = [
    "Symbol",
    "Name",
    "Sector",
    "Market Cap",
    "Quantity",
    "Avg Price",
    "Current Price",
    "Value",
    "Gain/Loss",
    "Gain/Loss %",
];

/// UTF-8 byte-order mark, prepended so spreadsheet tools detect the encoding.
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Default file name prefix for exported holdings.
pub const DEFAULT_EXPORT_PREFIX: &str = "portfolio-holdings";

/// Serializes holdings to CSV text.
///
/// Format:
/// - BOM, then a header row, then one row per holding in input order
/// - every field double-quoted, embedded quotes doubled
/// - numbers rounded to 2 decimals
/// - rows separated by CRLF, no trailing line break
pub struct ExportService {
    metrics_service: MetricsService,
}

impl ExportService {
    pub fn new() -> Self {
        Self {
            metrics_service: MetricsService::new(),
        }
    }

    /// Export already-normalized holdings. The caller decides order and filtering.
    pub fn export<'a, I>(&self, holdings: I) -> Result<String, CoreError>
    where
        I: IntoIterator<Item = &'a EnrichedHolding>,
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::CRLF)
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADERS)?;
        let mut rows = 0usize;
        for holding in holdings {
            writer.write_record(csv_row(holding))?;
            rows += 1;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CoreError::Export(e.to_string()))?;
        let body = String::from_utf8(bytes).map_err(|e| CoreError::Export(e.to_string()))?;
        debug!(rows, "holdings exported to CSV");

        let body = body.strip_suffix("\r\n").unwrap_or(&body);
        Ok(format!("{UTF8_BOM}{body}"))
    }

    /// Export wire rows, computing any missing derived column first.
    ///
    /// Produces the same text as [`export`](Self::export) over the
    /// pre-enriched equivalents.
    pub fn export_items(&self, items: &[HoldingsItem]) -> Result<String, CoreError> {
        let holdings = self.metrics_service.normalize_all(items.to_vec());
        self.export(&holdings)
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

/// `<prefix>-YYYYMMDD-HHMMSS.csv`
pub fn export_filename(prefix: &str, at: NaiveDateTime) -> String {
    format!("{}-{}.csv", prefix, at.format("%Y%m%d-%H%M%S"))
}

fn csv_row(holding: &EnrichedHolding) -> [String; 10] {
    let record = &holding.record;
    [
        record.symbol.clone(),
        record.name.clone(),
        record.sector.clone(),
        record.market_cap.label().to_string(),
        record.quantity.to_string(),
        format_number(record.avg_price),
        format_number(record.current_price),
        format_number(holding.value),
        format_number(holding.gain_loss),
        format_number(holding.gain_loss_percent),
    ]
}

fn format_number(value: f64) -> String {
    round2(value).to_string()
}
