use async_trait::async_trait;
use yahoo_finance_api::YahooError;

use super::traits::{LookbackPeriod, MarketDataProvider};
use crate::errors::CoreError;
use crate::models::price::PricePoint;

/// Yahoo Finance provider for stock close-price history.
///
/// - **Free**: No API key required.
/// - **No strict rate limits** (unofficial public API).
/// - **Coverage**: Global equities, ETFs, indices, mutual funds.
///
/// Uses the `yahoo_finance_api` crate which wraps Yahoo Finance's public
/// endpoints. An unknown symbol or an empty data set comes back as an
/// empty series (the trait's "no data" signal); only transport and
/// provider failures surface as errors.
pub struct YahooFinanceProvider {
    connector: yahoo_finance_api::YahooConnector,
}

impl YahooFinanceProvider {
    pub fn new() -> Result<Self, CoreError> {
        let connector = yahoo_finance_api::YahooConnector::new().map_err(|e| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("Failed to create connector: {e}"),
        })?;
        Ok(Self { connector })
    }

    /// Convert a unix timestamp (seconds) to `chrono::DateTime<Utc>`.
    fn timestamp_to_datetime(ts: i64) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(ts, 0)
    }

    fn map_error(symbol: &str, e: YahooError) -> CoreError {
        match e {
            YahooError::ConnectionFailed(cause) => {
                CoreError::Network(format!("Yahoo Finance request for {symbol} failed: {cause}"))
            }
            other => CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Failed to fetch quotes for {symbol}: {other}"),
            },
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    async fn fetch_series(
        &self,
        symbol: &str,
        period: LookbackPeriod,
    ) -> Result<Vec<PricePoint>, CoreError> {
        // Daily close prices over the lookback range, e.g. ("1d", "3mo").
        let resp = match self.connector.get_quote_range(symbol, "1d", period.as_str()).await {
            Ok(resp) => resp,
            // Yahoo answers with an empty data set for unknown symbols;
            // that is the "no data" signal, not a failure.
            Err(YahooError::NoResult | YahooError::NoQuotes) => return Ok(Vec::new()),
            Err(e) => return Err(Self::map_error(symbol, e)),
        };

        let quotes = match resp.quotes() {
            Ok(quotes) => quotes,
            Err(YahooError::NoResult | YahooError::NoQuotes) => return Ok(Vec::new()),
            Err(e) => return Err(Self::map_error(symbol, e)),
        };

        let points: Vec<PricePoint> = quotes
            .iter()
            .filter_map(|q| {
                let timestamp = Self::timestamp_to_datetime(q.timestamp)?;
                Some(PricePoint {
                    timestamp,
                    close: q.close,
                })
            })
            .collect();

        Ok(points)
    }
}
