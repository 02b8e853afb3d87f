use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::price::PricePoint;

/// How far back to fetch price history.
///
/// `OneDay` is the existence probe used when adding a stock; `ThreeMonths`
/// is the window the valuation table and chart are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookbackPeriod {
    OneDay,
    ThreeMonths,
}

impl LookbackPeriod {
    /// The provider-facing range string for this period.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LookbackPeriod::OneDay => "1d",
            LookbackPeriod::ThreeMonths => "3mo",
        }
    }
}

impl std::fmt::Display for LookbackPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait abstraction for the market-data provider.
///
/// The real implementation talks to Yahoo Finance; tests substitute a mock.
/// If the API stops working or changes, we replace only that one
/// implementation — the rest of the codebase is untouched.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the time-ordered close-price series for a symbol over the
    /// lookback window.
    ///
    /// Returns `Ok` with an empty series when the symbol is unknown or has
    /// no data in range; returns `Err` only for transport/provider failures.
    async fn fetch_series(
        &self,
        symbol: &str,
        period: LookbackPeriod,
    ) -> Result<Vec<PricePoint>, CoreError>;
}
