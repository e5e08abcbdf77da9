//! Flattening of nested company-facts documents into observations.

use crate::catalog::MetricCatalog;
use crate::document::CompanyFacts;
use crate::types::{FilingForm, Observation};

/// Flattens a company-facts document into a sequence of observations.
///
/// Scans the catalog's recognized concepts, in catalog order, against the
/// catalog's taxonomy namespace only. Within a concept, every unit type and
/// every entry is visited; one observation is emitted per entry filed on a
/// recognized periodic form ([`FilingForm`]), and entries from any other
/// form are silently dropped.
///
/// Fields are read defensively: a missing value or date yields an
/// observation with the corresponding field absent, never a failure. A
/// document without a facts section, or without the catalog's taxonomy,
/// yields an empty sequence — callers interpret empty as "no data
/// available".
///
/// The output order is fully determined by the document and the catalog, so
/// repeated calls produce identical sequences.
#[must_use]
pub fn flatten_facts(document: &CompanyFacts, catalog: &MetricCatalog) -> Vec<Observation> {
    let mut observations = Vec::new();

    let Some(concepts) = document.taxonomy(catalog.taxonomy()) else {
        return observations;
    };

    for metric in catalog.recognized() {
        let Some(concept) = concepts.get(metric) else {
            continue;
        };
        for (unit, entries) in &concept.units {
            for entry in entries {
                let Some(form) = entry.form.as_deref().and_then(FilingForm::from_form) else {
                    continue;
                };
                observations.push(Observation {
                    metric: metric.clone(),
                    value: entry.val,
                    unit: unit.clone(),
                    period_end: entry.end.clone(),
                    fiscal_period: entry.fp.clone(),
                    form,
                    fiscal_year: entry.fy,
                    filed: entry.filed.clone(),
                });
            }
        }
    }

    observations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> CompanyFacts {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_facts_section_yields_empty() {
        let doc = document(json!({ "cik": 1, "entityName": "Shell Co" }));
        assert!(flatten_facts(&doc, &MetricCatalog::us_gaap()).is_empty());
    }

    #[test]
    fn test_other_taxonomy_is_ignored() {
        let doc = document(json!({
            "facts": {
                "dei": {
                    "NetIncomeLoss": {
                        "units": { "USD": [ { "end": "2023-09-30", "val": 1.0, "form": "10-K" } ] }
                    }
                }
            }
        }));
        assert!(flatten_facts(&doc, &MetricCatalog::us_gaap()).is_empty());
    }

    #[test]
    fn test_unrecognized_forms_are_dropped() {
        let doc = document(json!({
            "facts": {
                "us-gaap": {
                    "NetIncomeLoss": {
                        "units": {
                            "USD": [
                                { "end": "2023-09-30", "val": 1.0, "fy": 2023, "form": "10-K" },
                                { "end": "2023-06-30", "val": 2.0, "fy": 2023, "form": "8-K" },
                                { "end": "2023-03-31", "val": 3.0, "fy": 2023, "form": "10-Q" },
                                { "end": "2023-01-15", "val": 4.0, "fy": 2023 }
                            ]
                        }
                    }
                }
            }
        }));

        let observations = flatten_facts(&doc, &MetricCatalog::us_gaap());
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].form, FilingForm::Annual);
        assert_eq!(observations[1].form, FilingForm::Quarterly);
    }

    #[test]
    fn test_unrecognized_metrics_are_skipped() {
        let doc = document(json!({
            "facts": {
                "us-gaap": {
                    "SomeObscureConcept": {
                        "units": { "USD": [ { "end": "2023-09-30", "val": 1.0, "form": "10-K" } ] }
                    },
                    "Assets": {
                        "units": { "USD": [ { "end": "2023-09-30", "val": 5.0, "fy": 2023, "form": "10-K" } ] }
                    }
                }
            }
        }));

        let observations = flatten_facts(&doc, &MetricCatalog::us_gaap());
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].metric, "Assets");
        assert_eq!(observations[0].value, Some(5.0));
    }

    #[test]
    fn test_missing_value_and_date_yield_absent_fields() {
        let doc = document(json!({
            "facts": {
                "us-gaap": {
                    "Assets": { "units": { "USD": [ { "form": "10-K", "fy": 2023 } ] } }
                }
            }
        }));

        let observations = flatten_facts(&doc, &MetricCatalog::us_gaap());
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].value, None);
        assert_eq!(observations[0].period_end, None);
        assert_eq!(observations[0].fiscal_year, Some(2023));
    }

    #[test]
    fn test_every_unit_type_is_visited() {
        let doc = document(json!({
            "facts": {
                "us-gaap": {
                    "EarningsPerShareBasic": {
                        "units": {
                            "USD/shares": [ { "end": "2023-09-30", "val": 6.16, "fy": 2023, "form": "10-K" } ],
                            "USD": [ { "end": "2023-09-30", "val": 6.0, "fy": 2023, "form": "10-K" } ]
                        }
                    }
                }
            }
        }));

        let observations = flatten_facts(&doc, &MetricCatalog::us_gaap());
        assert_eq!(observations.len(), 2);
        // BTreeMap order: "USD" sorts before "USD/shares".
        assert_eq!(observations[0].unit, "USD");
        assert_eq!(observations[1].unit, "USD/shares");
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let doc = document(json!({
            "facts": {
                "us-gaap": {
                    "Revenues": {
                        "units": {
                            "USD": [
                                { "end": "2023-09-30", "val": 1.0, "fy": 2023, "form": "10-K" },
                                { "end": "2022-09-24", "val": 2.0, "fy": 2022, "form": "10-K" }
                            ]
                        }
                    },
                    "Assets": {
                        "units": { "USD": [ { "end": "2023-09-30", "val": 3.0, "fy": 2023, "form": "10-K" } ] }
                    }
                }
            }
        }));

        let catalog = MetricCatalog::us_gaap();
        let first = flatten_facts(&doc, &catalog);
        let second = flatten_facts(&doc, &catalog);
        assert_eq!(first, second);
        // Catalog scan order puts Revenues ahead of Assets.
        assert_eq!(first[0].metric, "Revenues");
        assert_eq!(first[2].metric, "Assets");
    }
}
