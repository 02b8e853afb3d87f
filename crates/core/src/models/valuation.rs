use serde::{Deserialize, Serialize};

/// One display-ready row of the valuation table.
///
/// Derived and ephemeral: recomputed on every pass, never persisted.
/// `buy_price`, `current_price`, and `profit_loss` are already rounded
/// to 2 decimal places — the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRow {
    pub symbol: String,
    pub shares: f64,
    pub buy_price: f64,
    pub current_price: f64,
    pub profit_loss: f64,
}

impl ValuationRow {
    /// Sign classification of this row's profit/loss, for colour-coding.
    #[must_use]
    pub fn sign(&self) -> PnlSign {
        PnlSign::classify(self.profit_loss)
    }
}

/// Sign marker for a profit/loss figure.
///
/// A pure function of the number — mapping it to a colour or style is the
/// presentation layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PnlSign {
    Gain,
    Loss,
    Neutral,
}

impl PnlSign {
    #[must_use]
    pub fn classify(profit_loss: f64) -> Self {
        if profit_loss > 0.0 {
            PnlSign::Gain
        } else if profit_loss < 0.0 {
            PnlSign::Loss
        } else {
            PnlSign::Neutral
        }
    }
}

/// Round a value to 2 decimal places for display.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
