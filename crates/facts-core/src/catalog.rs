//! Metric catalog: which concepts to flatten and how to label them.
//!
//! The catalog carries the three configuration constants of the transform:
//! the taxonomy namespace, the recognized-metric list the flattener scans,
//! and the ordered canonical-label mapping the reducer applies. It is passed
//! in by the caller, so alternate taxonomies can be substituted without
//! touching the transform logic.

use serde::{Deserialize, Serialize};

/// A business-meaningful metric that may be reported under several
/// taxonomy concepts across filers and years.
///
/// `sources` is a priority list: the reducer uses the first source concept
/// with any data exclusively and never consults the rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalMetric {
    /// Display label (e.g. "Revenue").
    pub label: String,
    /// Source concept names in priority order.
    pub sources: Vec<String>,
}

impl CanonicalMetric {
    /// Creates a canonical metric from a label and ordered source names.
    #[must_use]
    pub fn new(label: impl Into<String>, sources: &[&str]) -> Self {
        Self {
            label: label.into(),
            sources: sources.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// The injectable configuration of the transform pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCatalog {
    taxonomy: String,
    recognized: Vec<String>,
    canonical: Vec<CanonicalMetric>,
}

impl MetricCatalog {
    /// Creates a catalog from its parts.
    #[must_use]
    pub fn new(
        taxonomy: impl Into<String>,
        recognized: Vec<String>,
        canonical: Vec<CanonicalMetric>,
    ) -> Self {
        Self {
            taxonomy: taxonomy.into(),
            recognized,
            canonical,
        }
    }

    /// The standard US-GAAP catalog.
    ///
    /// Recognized concepts cover the income statement, balance sheet, cash
    /// flow, and per-share figures of 10-K/10-Q filings; canonical labels
    /// map the five headline metrics to their common concept synonyms.
    #[must_use]
    pub fn us_gaap() -> Self {
        let recognized = [
            "Revenues",
            "RevenueFromContractWithCustomerExcludingAssessedTax",
            "CostOfRevenue",
            "CostOfGoodsAndServicesSold",
            "GrossProfit",
            "OperatingIncomeLoss",
            "NetIncomeLoss",
            "Assets",
            "AssetsCurrent",
            "Liabilities",
            "LiabilitiesCurrent",
            "StockholdersEquity",
            "CashAndCashEquivalentsAtCarryingValue",
            "NetCashProvidedByUsedInOperatingActivities",
            "EarningsPerShareBasic",
            "EarningsPerShareDiluted",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();

        let canonical = vec![
            CanonicalMetric::new(
                "Revenue",
                &[
                    "Revenues",
                    "RevenueFromContractWithCustomerExcludingAssessedTax",
                ],
            ),
            CanonicalMetric::new("Net Income", &["NetIncomeLoss"]),
            CanonicalMetric::new("Total Assets", &["Assets"]),
            CanonicalMetric::new("Cash", &["CashAndCashEquivalentsAtCarryingValue"]),
            CanonicalMetric::new("Stockholders Equity", &["StockholdersEquity"]),
        ];

        Self::new("us-gaap", recognized, canonical)
    }

    /// The taxonomy namespace the flattener scans.
    #[must_use]
    pub fn taxonomy(&self) -> &str {
        &self.taxonomy
    }

    /// Recognized concept names, in scan order.
    #[must_use]
    pub fn recognized(&self) -> &[String] {
        &self.recognized
    }

    /// Canonical metrics, in discovery order.
    #[must_use]
    pub fn canonical(&self) -> &[CanonicalMetric] {
        &self.canonical
    }
}

impl Default for MetricCatalog {
    fn default() -> Self {
        Self::us_gaap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_gaap_catalog() {
        let catalog = MetricCatalog::us_gaap();
        assert_eq!(catalog.taxonomy(), "us-gaap");
        assert!(catalog.recognized().iter().any(|m| m == "NetIncomeLoss"));
        assert!(catalog.recognized().iter().any(|m| m == "Revenues"));

        let revenue = &catalog.canonical()[0];
        assert_eq!(revenue.label, "Revenue");
        assert_eq!(revenue.sources[0], "Revenues");
        assert_eq!(
            revenue.sources[1],
            "RevenueFromContractWithCustomerExcludingAssessedTax"
        );
    }

    #[test]
    fn test_default_is_us_gaap() {
        assert_eq!(MetricCatalog::default(), MetricCatalog::us_gaap());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = MetricCatalog::new(
            "ifrs-full",
            vec!["Revenue".to_string()],
            vec![CanonicalMetric::new("Revenue", &["Revenue"])],
        );
        assert_eq!(catalog.taxonomy(), "ifrs-full");
        assert_eq!(catalog.recognized().len(), 1);
    }
}
