//! Static ticker-to-CIK lookup table.

use std::collections::HashMap;
use std::sync::LazyLock;

use facts_core::{Cik, IdentifierResolver, Ticker};

/// Supported filers: (ticker, CIK, company name).
///
/// Share classes of the same filer carry the same CIK (BRK-A/BRK-B,
/// GOOG/GOOGL).
const COMPANIES: &[(&str, &str, &str)] = &[
    ("AAPL", "0000320193", "Apple Inc"),
    ("MSFT", "0000789019", "Microsoft Corp"),
    ("GOOGL", "0001652044", "Alphabet Inc"),
    ("GOOG", "0001652044", "Alphabet Inc (Class C)"),
    ("AMZN", "0001018724", "Amazon.com Inc"),
    ("TSLA", "0001318605", "Tesla Inc"),
    ("META", "0001326801", "Meta Platforms Inc"),
    ("NVDA", "0001045810", "NVIDIA Corp"),
    ("BRK-A", "0001067983", "Berkshire Hathaway Inc"),
    ("BRK-B", "0001067983", "Berkshire Hathaway Inc (Class B)"),
    ("V", "0001403161", "Visa Inc"),
    ("JNJ", "0000200406", "Johnson & Johnson"),
    ("WMT", "0000104169", "Walmart Inc"),
    ("JPM", "0000019617", "JPMorgan Chase & Co"),
    ("MA", "0001141391", "Mastercard Inc"),
    ("PG", "0000080424", "Procter & Gamble Co"),
    ("UNH", "0000731766", "UnitedHealth Group Inc"),
    ("HD", "0000354950", "Home Depot Inc"),
    ("CVX", "0000093410", "Chevron Corp"),
    ("BAC", "0000070858", "Bank of America Corp"),
    ("ABBV", "0001551152", "AbbVie Inc"),
    ("PFE", "0000078003", "Pfizer Inc"),
    ("KO", "0000021344", "Coca-Cola Co"),
    ("AVGO", "0001730168", "Broadcom Inc"),
    ("MRK", "0000310158", "Merck & Co Inc"),
    ("PEP", "0000077476", "PepsiCo Inc"),
    ("TMO", "0000097745", "Thermo Fisher Scientific Inc"),
    ("COST", "0000909832", "Costco Wholesale Corp"),
    ("ABT", "0000001800", "Abbott Laboratories"),
    ("ACN", "0001467373", "Accenture PLC"),
    ("CSCO", "0000858877", "Cisco Systems Inc"),
    ("DHR", "0000313616", "Danaher Corp"),
    ("TXN", "0000097476", "Texas Instruments Inc"),
    ("VZ", "0000732712", "Verizon Communications Inc"),
    ("ADBE", "0000796343", "Adobe Inc"),
    ("NKE", "0000320187", "Nike Inc"),
    ("INTC", "0000050863", "Intel Corp"),
    ("CRM", "0001108524", "Salesforce Inc"),
    ("WFC", "0000072971", "Wells Fargo & Co"),
];

static INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    COMPANIES
        .iter()
        .enumerate()
        .map(|(position, (ticker, _, _))| (*ticker, position))
        .collect()
});

/// One row of the supported-company listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanyListing {
    /// Ticker symbol.
    pub ticker: &'static str,
    /// Zero-padded CIK.
    pub cik: &'static str,
    /// Company name.
    pub name: &'static str,
}

/// Static ticker-to-CIK table covering the supported large-cap filers.
///
/// Loaded once at first use and immutable thereafter. Lookup is O(1) and
/// case-insensitive via [`Ticker`] normalization; unknown tickers resolve
/// to `None`, never a guess.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticCikTable;

impl StaticCikTable {
    /// Creates the table.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// All supported companies, in listing order.
    pub fn companies(&self) -> impl Iterator<Item = CompanyListing> + '_ {
        COMPANIES
            .iter()
            .map(|(ticker, cik, name)| CompanyListing { ticker, cik, name })
    }
}

impl IdentifierResolver for StaticCikTable {
    fn resolve(&self, ticker: &Ticker) -> Option<Cik> {
        INDEX
            .get(ticker.as_str())
            .map(|&position| Cik::new(COMPANIES[position].1))
    }
}
