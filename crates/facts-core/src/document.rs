//! Typed form of the raw company-facts document.
//!
//! The EDGAR company-facts API returns a nested JSON document keyed by
//! taxonomy namespace, then concept (XBRL tag), then unit type, then an
//! ordered sequence of fact entries. The types here deserialize that shape
//! with every leaf field optional, so a partially populated document never
//! fails to parse; presence is checked explicitly where a field is read.
//!
//! Maps are `BTreeMap` so iteration order is stable across runs, which the
//! flattening stage relies on for deterministic output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A company-facts document as returned by the fetch collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFacts {
    /// CIK number, as reported in the document body.
    #[serde(default)]
    pub cik: Option<u64>,
    /// Registered entity name.
    #[serde(default)]
    pub entity_name: Option<String>,
    /// Facts organized by taxonomy namespace, then concept name.
    ///
    /// A document without a facts section deserializes to an empty map.
    #[serde(default)]
    pub facts: BTreeMap<String, BTreeMap<String, ConceptFacts>>,
}

impl CompanyFacts {
    /// Returns the concepts reported under a taxonomy namespace, if any.
    #[must_use]
    pub fn taxonomy(&self, namespace: &str) -> Option<&BTreeMap<String, ConceptFacts>> {
        self.facts.get(namespace)
    }
}

/// All facts reported under one taxonomy concept.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptFacts {
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
    /// Concept description.
    #[serde(default)]
    pub description: Option<String>,
    /// Fact entries keyed by unit type (USD, shares, ...).
    #[serde(default)]
    pub units: BTreeMap<String, Vec<FactEntry>>,
}

/// A single fact entry with filing metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FactEntry {
    /// Start date of the period, for duration facts.
    #[serde(default)]
    pub start: Option<String>,
    /// End date of the period.
    #[serde(default)]
    pub end: Option<String>,
    /// Reported value.
    #[serde(default)]
    pub val: Option<f64>,
    /// Accession number of the filing.
    #[serde(default)]
    pub accn: Option<String>,
    /// Filer-reported fiscal year.
    #[serde(default)]
    pub fy: Option<i32>,
    /// Fiscal period label (FY, Q1..Q4).
    #[serde(default)]
    pub fp: Option<String>,
    /// Form type the fact was filed on.
    #[serde(default)]
    pub form: Option<String>,
    /// Date the filing was made.
    #[serde(default)]
    pub filed: Option<String>,
    /// XBRL frame identifier, when assigned.
    #[serde(default)]
    pub frame: Option<String>,
}
