#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/facts/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! SEC EDGAR fetch collaborator.
//!
//! This crate provides:
//!
//! - [`EdgarClient`] - rate-limited HTTP access to the company-facts API
//! - [`StaticCikTable`] - in-process ticker-to-CIK resolution
//!
//! # Example
//!
//! ```no_run
//! use facts_edgar::{EdgarClient, StaticCikTable};
//! use facts_core::{FactsProvider, IdentifierResolver, Ticker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = StaticCikTable::new();
//!     let client = EdgarClient::new("MyApp/1.0 (contact@example.com)");
//!
//!     let cik = resolver.resolve(&Ticker::new("AAPL")).expect("known ticker");
//!     let facts = client.company_facts(&cik).await?;
//!     println!("Entity: {:?}", facts.entity_name);
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use facts_core::{Cik, CompanyFacts, FactsError, FactsProvider, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::debug;

mod tickers;
pub use tickers::{CompanyListing, StaticCikTable};

/// SEC EDGAR API base URL
const EDGAR_BASE_URL: &str = "https://data.sec.gov";

/// Default rate limit: 10 requests per second (SEC requirement)
const DEFAULT_RATE_LIMIT: Duration = Duration::from_millis(100);

/// Rate limiter to ensure we don't exceed SEC's rate limits
#[derive(Debug)]
struct RateLimiter {
    last_request: Instant,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Instant::now() - min_interval,
            min_interval,
        }
    }

    async fn wait(&mut self) {
        let elapsed = self.last_request.elapsed();
        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }
        self.last_request = Instant::now();
    }
}

/// SEC EDGAR company-facts client.
///
/// Fetches company-facts documents from the EDGAR XBRL API. Implements rate
/// limiting per SEC requirements (max 10 requests/second) and normalizes
/// every retrieval failure — network error, non-success status, malformed
/// body — into [`FactsError::Unavailable`].
#[derive(Debug)]
pub struct EdgarClient {
    client: reqwest::Client,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    #[allow(dead_code)]
    user_agent: String,
}

impl EdgarClient {
    /// Create a new EDGAR client with the specified user agent.
    ///
    /// The SEC requires identifying user agent headers. Format should be:
    /// "AppName/Version (contact@email.com)"
    ///
    /// # Example
    /// ```
    /// use facts_edgar::EdgarClient;
    ///
    /// let client = EdgarClient::new("MyApp/1.0 (contact@example.com)");
    /// ```
    #[must_use]
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(DEFAULT_RATE_LIMIT))),
            user_agent: user_agent.to_string(),
        }
    }

    /// Create a new EDGAR client with a custom HTTP client.
    ///
    /// # Arguments
    /// * `client` - Pre-configured reqwest client
    /// * `user_agent` - User agent string (for identification purposes)
    #[must_use]
    pub fn with_client(client: reqwest::Client, user_agent: &str) -> Self {
        Self {
            client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(DEFAULT_RATE_LIMIT))),
            user_agent: user_agent.to_string(),
        }
    }
}

#[async_trait]
impl FactsProvider for EdgarClient {
    fn name(&self) -> &str {
        "SEC EDGAR"
    }

    fn description(&self) -> &str {
        "SEC EDGAR company-facts provider for XBRL data from 10-K and 10-Q filings"
    }

    async fn company_facts(&self, cik: &Cik) -> Result<CompanyFacts> {
        // Rate limit
        self.rate_limiter.lock().await.wait().await;

        let url = format!("{}/api/xbrl/companyfacts/CIK{}.json", EDGAR_BASE_URL, cik);

        debug!("Fetching company facts from {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FactsError::Unavailable {
                cik: cik.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(FactsError::Unavailable {
                cik: cik.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let facts: CompanyFacts =
            response
                .json()
                .await
                .map_err(|e| FactsError::Unavailable {
                    cik: cik.to_string(),
                    reason: format!("malformed body: {e}"),
                })?;

        Ok(facts)
    }
}
