use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// The user's portfolio: an ordered list of holdings, one per symbol.
///
/// Order is insertion order and is preserved through add/delete, so the
/// valuation table and chart render rows in the order the user added them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }

    /// Check whether a (normalized) symbol is already held.
    /// Symbols are stored uppercased, so this is a plain equality scan.
    #[must_use]
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.holdings.iter().any(|h| h.symbol == symbol)
    }

    /// Remove the holding with exactly this symbol, if present.
    /// Returns `true` if something was removed.
    pub fn remove_symbol(&mut self, symbol: &str) -> bool {
        let before = self.holdings.len();
        self.holdings.retain(|h| h.symbol != symbol);
        self.holdings.len() != before
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }
}
