use chrono::{DateTime, Utc};
use tracing::warn;

use crate::models::holding::Holding;
use crate::models::price::PriceCache;
use crate::models::valuation::{round2, ValuationRow};
use crate::providers::traits::LookbackPeriod;
use crate::services::price_service::PriceService;

/// Turns holdings plus price data into display-ready valuation rows.
///
/// Pure business logic on top of `PriceService` — easy to test with a
/// mock provider.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Run one valuation pass over the holdings, in order.
    ///
    /// For each holding: fetch (or hit the cache for) its 3-month series,
    /// take the most recent close as the current price, and compute
    /// `profit_loss = (current_price - buy_price) * shares`. Holdings whose
    /// series is empty are omitted — no row, no error. Output order matches
    /// input order minus those omissions.
    pub async fn valuate(
        &self,
        holdings: &[Holding],
        cache: &mut PriceCache,
        price_service: &PriceService,
        now: DateTime<Utc>,
    ) -> Vec<ValuationRow> {
        let mut rows = Vec::with_capacity(holdings.len());

        for holding in holdings {
            let series = price_service
                .get_or_fetch(cache, &holding.symbol, LookbackPeriod::ThreeMonths, now)
                .await;

            let Some(last) = series.last() else {
                warn!(symbol = %holding.symbol, "no price data, omitting row");
                continue;
            };

            let current_price = last.close;
            let profit_loss = (current_price - holding.buy_price) * holding.shares;

            rows.push(ValuationRow {
                symbol: holding.symbol.clone(),
                shares: holding.shares,
                buy_price: round2(holding.buy_price),
                current_price: round2(current_price),
                profit_loss: round2(profit_loss),
            });
        }

        rows
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
