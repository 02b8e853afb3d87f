use chrono::{DateTime, Utc};

use crate::models::chart::ChartSeries;
use crate::models::holding::Holding;
use crate::models::price::PriceCache;
use crate::providers::traits::LookbackPeriod;
use crate::services::price_service::PriceService;

/// Builds the multi-series price chart data: one line per held symbol over
/// the 3-month window.
///
/// Goes through the same cache as the valuation pass, so generating the
/// chart right after the table is all cache hits — no second round of
/// provider calls.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// One chart series per holding, in holding order. Symbols with no
    /// price data are omitted, matching the valuation table.
    pub async fn chart_series(
        &self,
        holdings: &[Holding],
        cache: &mut PriceCache,
        price_service: &PriceService,
        now: DateTime<Utc>,
    ) -> Vec<ChartSeries> {
        let mut series = Vec::with_capacity(holdings.len());

        for holding in holdings {
            let points = price_service
                .get_or_fetch(cache, &holding.symbol, LookbackPeriod::ThreeMonths, now)
                .await;
            if points.is_empty() {
                continue;
            }
            series.push(ChartSeries {
                symbol: holding.symbol.clone(),
                points,
            });
        }

        series
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
