use serde::{Deserialize, Serialize};

use super::price::PricePoint;

/// One line of the multi-series price chart: a symbol and its close-price
/// history over the lookback window.
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Ticker symbol this line belongs to (e.g., "AAPL")
    pub symbol: String,

    /// Time-ordered close prices over the requested window
    pub points: Vec<PricePoint>,
}
