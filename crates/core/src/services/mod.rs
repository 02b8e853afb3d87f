pub mod chart_service;
pub mod portfolio_service;
pub mod price_service;
pub mod valuation_service;
