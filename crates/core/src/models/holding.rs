use serde::{Deserialize, Serialize};

/// Market capitalisation tier of a listed company.
///
/// Holdings served by the backend are always `Large`, `Mid` or `Small`.
/// `Unclassified` only appears on the client side, for rows whose tier was
/// missing or unrecognised in the API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarketCapTier {
    Large,
    Mid,
    Small,
    #[serde(other)]
    Unclassified,
}

impl MarketCapTier {
    /// Label used for allocation keys and the CSV "Market Cap" column.
    /// `Unclassified` renders as an empty string.
    pub fn label(&self) -> &'static str {
        match self {
            MarketCapTier::Large => "Large",
            MarketCapTier::Mid => "Mid",
            MarketCapTier::Small => "Small",
            MarketCapTier::Unclassified => "",
        }
    }
}

impl std::fmt::Display for MarketCapTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One position in a single security, as held by the holding store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    /// Ticker symbol, unique within the store (e.g., "RELIANCE", "TCS")
    pub symbol: String,

    /// Company name (e.g., "Reliance Industries Ltd")
    pub name: String,

    /// Number of shares held
    pub quantity: u32,

    /// Average purchase price per share (cost basis)
    pub avg_price: f64,

    /// Latest price per share
    pub current_price: f64,

    /// Sector label (e.g., "Technology", "Banking")
    pub sector: String,

    /// Market capitalisation tier
    pub market_cap: MarketCapTier,
}

impl HoldingRecord {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        avg_price: f64,
        current_price: f64,
        sector: impl Into<String>,
        market_cap: MarketCapTier,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            quantity,
            avg_price,
            current_price,
            sector: sector.into(),
            market_cap,
        }
    }

    /// Cost basis of the whole position: `avg_price × quantity`.
    pub fn invested(&self) -> f64 {
        self.avg_price * f64::from(self.quantity)
    }
}

/// A holding record together with its derived metrics.
///
/// Serializes flat, so the JSON carries the record fields alongside
/// `value`, `gainLoss` and `gainLossPercent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedHolding {
    #[serde(flatten)]
    pub record: HoldingRecord,

    /// `quantity × current_price`, unrounded
    pub value: f64,

    /// `(current_price − avg_price) × quantity`, unrounded
    pub gain_loss: f64,

    /// `gain_loss / (avg_price × quantity) × 100`, rounded to 2 decimals
    pub gain_loss_percent: f64,
}

/// A holding row as received over the wire by the client.
///
/// Only the identifying and price fields are guaranteed; everything else may
/// be missing from a partial response and is filled in by
/// [`MetricsService::normalize`](crate::services::metrics_service::MetricsService::normalize).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsItem {
    pub symbol: String,
    pub name: String,
    pub quantity: u32,
    pub avg_price: f64,
    pub current_price: f64,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub market_cap: Option<MarketCapTier>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub gain_loss: Option<f64>,
    #[serde(default)]
    pub gain_loss_percent: Option<f64>,
}

impl From<&HoldingRecord> for HoldingsItem {
    /// A raw item with no derived fields, as a partial server response would carry.
    fn from(record: &HoldingRecord) -> Self {
        Self {
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            quantity: record.quantity,
            avg_price: record.avg_price,
            current_price: record.current_price,
            sector: Some(record.sector.clone()),
            market_cap: Some(record.market_cap),
            value: None,
            gain_loss: None,
            gain_loss_percent: None,
        }
    }
}
