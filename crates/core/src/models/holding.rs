use serde::{Deserialize, Serialize};

/// A recorded position in one symbol: how many shares were bought at what price.
///
/// Serializes directly to/from the CSV row store, so the field renames
/// match the store's column headers (`Symbol`, `Shares`, `Buy_Price`).
/// Holdings are immutable once created — there is no in-place edit,
/// only add and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased and stripped of currency markers (e.g., "AAPL")
    #[serde(rename = "Symbol")]
    pub symbol: String,

    /// Number of shares held (non-negative; fractional shares allowed)
    #[serde(rename = "Shares")]
    pub shares: f64,

    /// Purchase price per share (non-negative)
    #[serde(rename = "Buy_Price")]
    pub buy_price: f64,
}

impl Holding {
    /// Build a holding from an already-normalized symbol.
    /// Use [`normalize_symbol`] first for raw user input.
    pub fn new(symbol: impl Into<String>, shares: f64, buy_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            shares,
            buy_price,
        }
    }
}

/// Normalize raw user input into a canonical ticker symbol:
/// trim whitespace, drop `$` currency markers, and uppercase.
///
/// `"  $tsla "` → `"TSLA"`. An empty result means the input was not
/// a usable symbol.
#[must_use]
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().replace('$', "").to_uppercase()
}
