//! Built-in ticker cohorts for quick comparisons

use serde::Serialize;

/// A named selection of tickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioTheme {
    pub name: &'static str,
    pub description: &'static str,
    pub tickers: &'static [&'static str],
}

pub const PORTFOLIO_THEMES: &[PortfolioTheme] = &[
    PortfolioTheme {
        name: "Magnificent Seven",
        description: "The seven largest and most dominant tech companies in the U.S. stock market.",
        tickers: &["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA"],
    },
    PortfolioTheme {
        name: "Semiconductor Leaders",
        description: "Leading companies in the semiconductor industry driving innovation and technology.",
        tickers: &["NVDA", "AMD", "INTC", "TXN", "QCOM", "AVGO", "ASML"],
    },
    PortfolioTheme {
        name: "Financial Leaders",
        description: "Top financial institutions in the U.S. known for their market influence and stability.",
        tickers: &["JPM", "BAC", "AXP", "V", "MA", "C", "GS", "XYZ"],
    },
    PortfolioTheme {
        name: "Consumer Discretionary",
        description: "Major players in the consumer discretionary sector, known for their strong market presence.",
        tickers: &["AMZN", "TSLA", "HD", "MCD", "NKE", "SBUX", "LOW", "NFLX"],
    },
];

/// Case-insensitive lookup by theme name
pub fn find_theme(name: &str) -> Option<&'static PortfolioTheme> {
    let name = name.trim();
    PORTFOLIO_THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

impl PortfolioTheme {
    pub fn contains(&self, ticker: &str) -> bool {
        self.tickers.iter().any(|t| t.eq_ignore_ascii_case(ticker.trim()))
    }
}
