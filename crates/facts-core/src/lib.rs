#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/facts/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and transform for company-facts summaries.
//!
//! This crate provides the foundational pieces of the pipeline:
//!
//! - [`Ticker`], [`Cik`], [`Observation`], [`SummaryRow`], [`CombinedTable`] - data model
//! - [`CompanyFacts`] - typed form of the raw facts document
//! - [`MetricCatalog`] - injectable recognized-metric and canonical-label configuration
//! - [`flatten_facts`], [`filter_recent`], [`summarize`] - the pure transform stages
//! - [`IdentifierResolver`], [`FactsProvider`] - collaborator traits

/// Metric catalog: recognized concepts and canonical labels.
pub mod catalog;
/// Typed form of the raw company-facts document.
pub mod document;
/// Error types for the facts pipeline.
pub mod error;
/// Trailing-window filtering of observations.
pub mod filter;
/// Flattening of facts documents into observations.
pub mod flatten;
/// Collaborator traits (resolver, provider).
pub mod provider;
/// Reduction of observations to canonical-metric summaries.
pub mod summarize;
/// Core data types (Ticker, Cik, Observation, SummaryRow, ...).
pub mod types;

// Re-export commonly used items at crate root
pub use catalog::{CanonicalMetric, MetricCatalog};
pub use document::{CompanyFacts, ConceptFacts, FactEntry};
pub use error::{FactsError, Result};
pub use filter::{filter_recent, filter_recent_as_of, trailing_cutoff};
pub use flatten::flatten_facts;
pub use provider::{FactsProvider, IdentifierResolver};
pub use summarize::{first_source_with_data, summarize};
pub use types::{
    Cik, CombinedTable, FilingForm, Observation, SummaryRow, Ticker, TickerOutcome, TickerStatus,
};
