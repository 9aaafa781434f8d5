/// Column the holdings table is sorted by.
///
/// Every sortable column has its own key, including "Avg Price" and "Qty".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Symbol,
    Name,
    Sector,
    Quantity,
    AvgPrice,
    CurrentPrice,
    Value,
    GainLoss,
    GainLossPercent,
}

impl SortKey {
    /// String keys compare lexicographically, all others numerically.
    pub fn is_textual(&self) -> bool {
        matches!(self, SortKey::Symbol | SortKey::Name | SortKey::Sector)
    }

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Symbol => "Symbol",
            SortKey::Name => "Name",
            SortKey::Sector => "Sector",
            SortKey::Quantity => "Qty",
            SortKey::AvgPrice => "Avg Price",
            SortKey::CurrentPrice => "Current",
            SortKey::Value => "Value",
            SortKey::GainLoss => "G/L",
            SortKey::GainLossPercent => "G/L %",
        }
    }
}

/// Sort direction of the holdings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort and search state of the holdings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub sort_key: SortKey,
    pub direction: SortDirection,
    pub query: String,
}

impl Default for TableState {
    /// Largest position first, no search.
    fn default() -> Self {
        Self {
            sort_key: SortKey::Value,
            direction: SortDirection::Descending,
            query: String::new(),
        }
    }
}

impl TableState {
    /// Header click: the active column flips direction, a new column starts descending.
    pub fn toggle(&mut self, key: SortKey) {
        if key == self.sort_key {
            self.direction = self.direction.flipped();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Descending;
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}
