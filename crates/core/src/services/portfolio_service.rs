use crate::errors::CoreError;
use crate::models::holding::{normalize_symbol, Holding};
use crate::models::portfolio::Portfolio;
use crate::providers::traits::LookbackPeriod;
use crate::services::price_service::PriceService;

/// Manages the holdings list: add with validation, delete by symbol.
///
/// Validation happens entirely before any mutation, so a rejected add
/// leaves the portfolio untouched.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and append a new holding.
    ///
    /// Rules:
    /// - the normalized symbol must be non-empty;
    /// - shares and buy price must be non-negative;
    /// - the symbol must not already be in the portfolio;
    /// - a single-day lookup must return data (otherwise the symbol does
    ///   not exist or has nothing tradable). Provider errors propagate
    ///   with their cause — on add, the user wants to know why.
    ///
    /// Returns the holding as stored (normalized symbol).
    pub async fn add_holding(
        &self,
        portfolio: &mut Portfolio,
        price_service: &PriceService,
        symbol: &str,
        shares: f64,
        buy_price: f64,
    ) -> Result<Holding, CoreError> {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return Err(CoreError::ValidationError(
                "Enter a valid symbol".into(),
            ));
        }
        if shares < 0.0 || !shares.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "Shares must be a non-negative number, got {shares}"
            )));
        }
        if buy_price < 0.0 || !buy_price.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "Buy price must be a non-negative number, got {buy_price}"
            )));
        }
        if portfolio.contains_symbol(&symbol) {
            return Err(CoreError::ValidationError(format!(
                "{symbol} already in portfolio"
            )));
        }

        // Existence probe: uncached one-day lookup. Empty means the symbol
        // doesn't exist or has no tradable data.
        let probe = price_service.lookup(&symbol, LookbackPeriod::OneDay).await?;
        if probe.is_empty() {
            return Err(CoreError::NoPriceData { symbol });
        }

        let holding = Holding::new(symbol, shares, buy_price);
        portfolio.holdings.push(holding.clone());
        Ok(holding)
    }

    /// Delete the holding matching `symbol` exactly.
    ///
    /// Missing symbols are a no-op, not an error: the selection UI only
    /// offers existing symbols, but a stale selection must not fail.
    /// Returns `true` if a holding was removed.
    pub fn delete_holding(&self, portfolio: &mut Portfolio, symbol: &str) -> bool {
        portfolio.remove_symbol(symbol)
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
