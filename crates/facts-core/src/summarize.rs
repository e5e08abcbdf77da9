//! Reduction of observations to a per-company canonical-metric summary.

use std::collections::HashSet;

use crate::catalog::CanonicalMetric;
use crate::types::{FilingForm, Observation, SummaryRow, Ticker};

/// Reduces filtered observations to at most `max_periods` annual summary
/// rows per canonical metric.
///
/// Only annual-report observations contribute; quarterly data stays
/// available in the unreduced observation set for other consumers. For each
/// canonical label, [`first_source_with_data`] picks the single source
/// concept to read. Entries are deduplicated by fiscal year — the first
/// entry encountered in the input's date-descending order wins, which on
/// upstream ties is the most recently filed one — then the retained years
/// are ordered descending and truncated to `max_periods`.
///
/// Labels with no summarizable data produce zero rows, never a placeholder.
/// The output upholds the table invariant: at most one row per
/// (company, metric, fiscal year).
#[must_use]
pub fn summarize(
    observations: &[Observation],
    company: &Ticker,
    canonical: &[CanonicalMetric],
    max_periods: usize,
) -> Vec<SummaryRow> {
    let mut rows = Vec::new();

    for metric in canonical {
        let Some(source) = first_source_with_data(observations, &metric.sources) else {
            continue;
        };

        let mut seen = HashSet::new();
        let mut retained: Vec<(i32, &str, f64, &str)> = Vec::new();
        for observation in observations
            .iter()
            .filter(|o| o.form == FilingForm::Annual && o.metric == source)
        {
            let (Some(fiscal_year), Some(end), Some(value)) = (
                observation.fiscal_year,
                observation.period_end.as_deref(),
                observation.value,
            ) else {
                continue;
            };
            if seen.insert(fiscal_year) {
                retained.push((fiscal_year, end, value, observation.unit.as_str()));
            }
        }

        retained.sort_by(|a, b| b.0.cmp(&a.0));
        retained.truncate(max_periods);

        for (fiscal_year, date, value, unit) in retained {
            rows.push(SummaryRow::new(
                company.clone(),
                metric.label.clone(),
                value,
                date,
                fiscal_year,
                unit,
            ));
        }
    }

    rows
}

/// Ordered search over a canonical label's source priority list.
///
/// Returns the first source concept with at least one summarizable annual
/// observation. Once a source matches it is used exclusively — later
/// sources are never consulted, even when they would contribute additional
/// fiscal years.
#[must_use]
pub fn first_source_with_data<'s>(
    observations: &[Observation],
    sources: &'s [String],
) -> Option<&'s str> {
    sources.iter().map(String::as_str).find(|source| {
        observations
            .iter()
            .any(|o| o.form == FilingForm::Annual && o.metric == *source && is_summarizable(o))
    })
}

/// An observation can contribute a summary row when it carries a fiscal
/// year, a period end, and a non-null value. Null-valued entries neither
/// occupy a fiscal-year slot nor count as data for the priority search.
fn is_summarizable(observation: &Observation) -> bool {
    observation.fiscal_year.is_some()
        && observation.period_end.is_some()
        && observation.value.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MetricCatalog;

    fn annual(metric: &str, fy: i32, end: &str, value: f64) -> Observation {
        Observation::new(metric, "USD", FilingForm::Annual)
            .with_value(value)
            .with_period_end(end)
            .with_fiscal_year(fy)
            .with_fiscal_period("FY")
    }

    fn quarterly(metric: &str, fy: i32, end: &str, value: f64) -> Observation {
        Observation::new(metric, "USD", FilingForm::Quarterly)
            .with_value(value)
            .with_period_end(end)
            .with_fiscal_year(fy)
    }

    fn company() -> Ticker {
        Ticker::new("AAPL")
    }

    #[test]
    fn test_first_priority_source_is_exclusive() {
        // Second-priority source has an extra fiscal year, which must be ignored.
        let observations = vec![
            annual("Revenues", 2023, "2023-09-30", 100.0),
            annual(
                "RevenueFromContractWithCustomerExcludingAssessedTax",
                2022,
                "2022-09-24",
                90.0,
            ),
        ];

        let rows = summarize(
            &observations,
            &company(),
            MetricCatalog::us_gaap().canonical(),
            5,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].metric, "Revenue");
        assert_eq!(rows[0].fiscal_year, 2023);
        assert_eq!(rows[0].value, 100.0);
    }

    #[test]
    fn test_second_priority_source_used_when_first_absent() {
        let observations = vec![annual(
            "RevenueFromContractWithCustomerExcludingAssessedTax",
            2023,
            "2023-09-30",
            100.0,
        )];

        let rows = summarize(
            &observations,
            &company(),
            MetricCatalog::us_gaap().canonical(),
            5,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].metric, "Revenue");
    }

    #[test]
    fn test_quarterly_observations_do_not_contribute() {
        let observations = vec![
            quarterly("NetIncomeLoss", 2023, "2023-06-30", 25.0),
            annual("NetIncomeLoss", 2023, "2023-09-30", 97.0),
        ];

        let rows = summarize(
            &observations,
            &company(),
            MetricCatalog::us_gaap().canonical(),
            5,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, 97.0);
    }

    #[test]
    fn test_dedup_keeps_first_entry_per_fiscal_year() {
        // Date-descending input: the restated (later-filed) entry comes first
        // and must win the fiscal-year slot.
        let observations = vec![
            annual("NetIncomeLoss", 2022, "2023-09-30", 95.0),
            annual("NetIncomeLoss", 2022, "2022-09-24", 99.0),
        ];

        let rows = summarize(
            &observations,
            &company(),
            MetricCatalog::us_gaap().canonical(),
            5,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fiscal_year, 2022);
        assert_eq!(rows[0].value, 95.0);
    }

    #[test]
    fn test_max_periods_keeps_most_recent_fiscal_years() {
        let observations = vec![
            annual("Assets", 2023, "2023-09-30", 5.0),
            annual("Assets", 2022, "2022-09-24", 4.0),
            annual("Assets", 2021, "2021-09-25", 3.0),
            annual("Assets", 2020, "2020-09-26", 2.0),
            annual("Assets", 2019, "2019-09-28", 1.0),
        ];

        let rows = summarize(
            &observations,
            &company(),
            MetricCatalog::us_gaap().canonical(),
            3,
        );
        let years: Vec<_> = rows.iter().map(|r| r.fiscal_year).collect();
        assert_eq!(years, vec![2023, 2022, 2021]);
    }

    #[test]
    fn test_rows_ordered_by_fiscal_year_descending() {
        let observations = vec![
            annual("NetIncomeLoss", 2022, "2022-09-24", 99.0),
            annual("NetIncomeLoss", 2023, "2023-09-30", 97.0),
        ];

        let rows = summarize(
            &observations,
            &company(),
            MetricCatalog::us_gaap().canonical(),
            5,
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fiscal_year, 2023);
        assert_eq!(rows[1].fiscal_year, 2022);
    }

    #[test]
    fn test_null_values_fall_through_to_next_source() {
        // First-priority source exists but carries no values; the search
        // must move on instead of emitting nothing.
        let observations = vec![
            Observation::new("Revenues", "USD", FilingForm::Annual)
                .with_period_end("2023-09-30")
                .with_fiscal_year(2023),
            annual(
                "RevenueFromContractWithCustomerExcludingAssessedTax",
                2023,
                "2023-09-30",
                100.0,
            ),
        ];

        let rows = summarize(
            &observations,
            &company(),
            MetricCatalog::us_gaap().canonical(),
            5,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, 100.0);
    }

    #[test]
    fn test_null_value_does_not_occupy_fiscal_year_slot() {
        let observations = vec![
            Observation::new("NetIncomeLoss", "USD", FilingForm::Annual)
                .with_period_end("2023-09-30")
                .with_fiscal_year(2023),
            annual("NetIncomeLoss", 2023, "2022-09-24", 99.0),
        ];

        let rows = summarize(
            &observations,
            &company(),
            MetricCatalog::us_gaap().canonical(),
            5,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, 99.0);
    }

    #[test]
    fn test_labels_without_data_produce_no_rows() {
        let rows = summarize(&[], &company(), MetricCatalog::us_gaap().canonical(), 5);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_no_duplicate_company_metric_year_triples() {
        let observations = vec![
            annual("Revenues", 2023, "2023-09-30", 100.0),
            annual("Revenues", 2023, "2023-09-30", 100.0),
            annual("Revenues", 2022, "2022-09-24", 90.0),
            annual("NetIncomeLoss", 2023, "2023-09-30", 25.0),
        ];

        let rows = summarize(
            &observations,
            &company(),
            MetricCatalog::us_gaap().canonical(),
            5,
        );
        let mut keys: Vec<_> = rows
            .iter()
            .map(|r| (r.company.as_str(), r.metric.as_str(), r.fiscal_year))
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_first_source_with_data_search_order() {
        let sources = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let observations = vec![
            annual("B", 2023, "2023-12-31", 1.0),
            annual("C", 2023, "2023-12-31", 2.0),
        ];

        assert_eq!(first_source_with_data(&observations, &sources), Some("B"));
        assert_eq!(first_source_with_data(&[], &sources), None);
    }
}
