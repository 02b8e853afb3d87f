pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::path::{Path, PathBuf};

use chrono::Utc;

use errors::CoreError;
use models::{
    chart::ChartSeries,
    holding::Holding,
    portfolio::Portfolio,
    price::PriceCache,
    valuation::ValuationRow,
};
use providers::traits::MarketDataProvider;
use providers::yahoo_finance::YahooFinanceProvider;
use services::{
    chart_service::ChartService, portfolio_service::PortfolioService,
    price_service::PriceService, valuation_service::ValuationService,
};
use storage::csv_store::CsvStore;

/// Main entry point for the Stock Dashboard core library.
///
/// Owns the portfolio, the session price cache, and the services that
/// operate on them. The presentation layer drives it with three actions —
/// add, delete, refresh — each of which runs one full synchronous pass:
/// reload holdings from the store, valuate, hand rows back for rendering.
#[must_use]
pub struct StockDashboard {
    portfolio: Portfolio,
    price_cache: PriceCache,
    portfolio_service: PortfolioService,
    price_service: PriceService,
    valuation_service: ValuationService,
    chart_service: ChartService,
    store_path: PathBuf,
}

impl std::fmt::Debug for StockDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockDashboard")
            .field("holdings", &self.portfolio.len())
            .field("cached_symbols", &self.price_cache.symbol_count())
            .field("store_path", &self.store_path)
            .finish()
    }
}

impl StockDashboard {
    /// Open the dashboard against the CSV store at `path`, initializing an
    /// empty store if the file does not exist yet. Uses Yahoo Finance as
    /// the market-data provider.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let provider = YahooFinanceProvider::new()?;
        Self::open_with_provider(path, Box::new(provider))
    }

    /// Open against the store at `path` with a custom market-data provider.
    /// The seam tests use to substitute a mock for the live API.
    pub fn open_with_provider(
        path: impl AsRef<Path>,
        provider: Box<dyn MarketDataProvider>,
    ) -> Result<Self, CoreError> {
        let store_path = path.as_ref().to_path_buf();
        let holdings = CsvStore::load(&store_path)?;
        Ok(Self::build(Portfolio::new(holdings), store_path, provider))
    }

    // ── Actions ─────────────────────────────────────────────────────

    /// Add a stock to the portfolio and persist the store.
    ///
    /// The symbol is normalized (trimmed, `$` stripped, uppercased) and
    /// validated: non-empty, not a duplicate, non-negative numbers, and a
    /// live one-day lookup must return data. On any rejection the portfolio
    /// and the store are unchanged.
    pub async fn add_stock(
        &mut self,
        symbol: &str,
        shares: f64,
        buy_price: f64,
    ) -> Result<Holding, CoreError> {
        let holding = self
            .portfolio_service
            .add_holding(
                &mut self.portfolio,
                &self.price_service,
                symbol,
                shares,
                buy_price,
            )
            .await?;

        if let Err(e) = CsvStore::save(&self.store_path, &self.portfolio.holdings) {
            // Keep memory and disk consistent: roll the append back.
            self.portfolio.remove_symbol(&holding.symbol);
            return Err(e);
        }
        Ok(holding)
    }

    /// Delete the holding with exactly this symbol and persist the store.
    ///
    /// A symbol that is not present (stale selection) is a no-op, not an
    /// error. Returns `true` if a holding was removed.
    pub fn delete_stock(&mut self, symbol: &str) -> Result<bool, CoreError> {
        let removed = self
            .portfolio_service
            .delete_holding(&mut self.portfolio, symbol);
        if removed {
            CsvStore::save(&self.store_path, &self.portfolio.holdings)?;
        }
        Ok(removed)
    }

    /// Run one full valuation pass: reload holdings from the store, then
    /// compute a display-ready row per holding (cache-assisted, one
    /// sequential provider call per cold symbol). Holdings without price
    /// data are omitted from the result.
    pub async fn refresh(&mut self) -> Result<Vec<ValuationRow>, CoreError> {
        self.portfolio = Portfolio::new(CsvStore::load(&self.store_path)?);
        let rows = self
            .valuation_service
            .valuate(
                &self.portfolio.holdings,
                &mut self.price_cache,
                &self.price_service,
                Utc::now(),
            )
            .await;
        Ok(rows)
    }

    /// Chart data: one 3-month close-price series per holding, through the
    /// same cache as `refresh()`, so a chart built right after the table
    /// costs no extra provider calls.
    pub async fn chart_series(&mut self) -> Vec<ChartSeries> {
        self.chart_service
            .chart_series(
                &self.portfolio.holdings,
                &mut self.price_cache,
                &self.price_service,
                Utc::now(),
            )
            .await
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current in-memory holdings, in portfolio order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.portfolio.holdings
    }

    /// Number of distinct symbols in the session price cache.
    #[must_use]
    pub fn cache_symbol_count(&self) -> usize {
        self.price_cache.symbol_count()
    }

    /// Drop all cached price data; the next pass re-fetches everything.
    pub fn cache_clear(&mut self) {
        self.price_cache.clear();
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        portfolio: Portfolio,
        store_path: PathBuf,
        provider: Box<dyn MarketDataProvider>,
    ) -> Self {
        Self {
            portfolio,
            price_cache: PriceCache::new(),
            portfolio_service: PortfolioService::new(),
            price_service: PriceService::new(provider),
            valuation_service: ValuationService::new(),
            chart_service: ChartService::new(),
            store_path,
        }
    }
}
