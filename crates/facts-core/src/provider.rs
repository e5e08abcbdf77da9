//! Collaborator traits for resolving tickers and fetching facts documents.
//!
//! This module defines the two seams of the pipeline:
//!
//! - [`IdentifierResolver`] - Ticker-to-CIK lookup
//! - [`FactsProvider`] - Company-facts document retrieval

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    document::CompanyFacts,
    error::Result,
    types::{Cik, Ticker},
};

/// Maps ticker symbols to filer identifiers.
///
/// Implementations are pure lookups: no I/O, and no failure mode beyond
/// "not found", which callers treat as a terminal condition for that ticker.
pub trait IdentifierResolver: Send + Sync + Debug {
    /// Resolves a ticker to its CIK.
    ///
    /// Unknown tickers yield `None`, never a guess.
    fn resolve(&self, ticker: &Ticker) -> Option<Cik>;
}

/// Fetch collaborator for company-facts documents.
#[async_trait]
pub trait FactsProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g. "SEC EDGAR").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;

    /// Fetches the facts document for a filer.
    ///
    /// Network failures, non-success responses, and malformed response
    /// bodies are all normalized to
    /// [`FactsError::Unavailable`](crate::FactsError::Unavailable); callers
    /// never see transport-level detail such as HTTP status codes.
    async fn company_facts(&self, cik: &Cik) -> Result<CompanyFacts>;
}
