#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/facts/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Export collaborators for the combined summary table.
//!
//! - [`Exporter`] / [`ExportFormat`] - delimited text and JSON serialization
//! - [`summary_frame`] - Polars `DataFrame` view for tabular presentation

/// CSV / JSON serialization of summary rows.
pub mod export;
/// Polars view of the combined summary table.
pub mod frame;

pub use export::{ExportError, ExportFormat, Exporter, SUMMARY_COLUMNS};
pub use frame::summary_frame;
