use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::price::{PriceCache, PricePoint};
use crate::providers::traits::{LookbackPeriod, MarketDataProvider};

/// Fetches price series from the market-data provider with TTL caching.
///
/// Cache strategy:
/// - A series fetched less than `CACHE_TTL_SECONDS` ago is served from the
///   cache untouched — a pure hit, no provider call.
/// - On miss or expiry, fetch and store the result with `fetched_at = now`,
///   overwriting any prior entry for that symbol.
/// - A fetch failure is cached as an empty series, so repeated failures
///   within the TTL window do not retry on every valuation pass.
///
/// `now` is injected by the caller rather than read from the clock, which
/// keeps TTL behavior deterministic under test.
pub struct PriceService {
    provider: Box<dyn MarketDataProvider>,
}

impl PriceService {
    pub fn new(provider: Box<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Get the price series for a symbol, consulting the cache first.
    ///
    /// Infallible by design: any provider failure degrades to an empty
    /// series (logged, cached), and the caller's row for that symbol is
    /// simply omitted. One bad symbol must not break the whole dashboard.
    pub async fn get_or_fetch(
        &self,
        cache: &mut PriceCache,
        symbol: &str,
        period: LookbackPeriod,
        now: DateTime<Utc>,
    ) -> Vec<PricePoint> {
        if let Some(series) = cache.get_fresh(symbol, now) {
            debug!(symbol, %period, "price cache hit");
            return series.to_vec();
        }

        debug!(symbol, %period, "price cache miss, fetching");
        let series = match self.provider.fetch_series(symbol, period).await {
            Ok(series) => series,
            Err(e) => {
                warn!(symbol, provider = self.provider.name(), error = %e,
                    "price fetch failed, caching empty series");
                Vec::new()
            }
        };

        cache.insert(symbol, series.clone(), now);
        series
    }

    /// Single uncached fetch, used as the existence probe when adding a
    /// stock. Provider errors propagate so the add flow can show the cause.
    pub async fn lookup(
        &self,
        symbol: &str,
        period: LookbackPeriod,
    ) -> Result<Vec<PricePoint>, CoreError> {
        self.provider.fetch_series(symbol, period).await
    }

    /// Name of the underlying provider (for logs/errors).
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}
