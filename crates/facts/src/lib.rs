#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/facts/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Unified interface for the company-facts summary pipeline.
//!
//! This crate re-exports the core types, the EDGAR collaborators, and the
//! export surface, and provides [`FactsPipeline`] — the sequential
//! multi-entity aggregator that drives resolve → fetch → flatten → filter →
//! summarize per ticker and reports every ticker's status individually.

// Core types and traits
pub use facts_core::*;

// Collaborators
pub use facts_edgar::{CompanyListing, EdgarClient, StaticCikTable};
pub use facts_export::{ExportError, ExportFormat, Exporter, SUMMARY_COLUMNS, summary_frame};

mod pipeline;
pub use pipeline::{BatchReport, FactsPipeline};
