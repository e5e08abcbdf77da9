//! Polars view of the combined summary table.

use facts_core::CombinedTable;
use polars::prelude::*;

/// Builds a `DataFrame` with the canonical summary columns.
///
/// Column order matches the delimited export contract: Company, Metric,
/// Value, Date, Fiscal Year, Unit.
pub fn summary_frame(table: &CombinedTable) -> PolarsResult<DataFrame> {
    let rows = table.rows();
    DataFrame::new(vec![
        Column::new(
            "Company".into(),
            rows.iter().map(|r| r.company.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "Metric".into(),
            rows.iter().map(|r| r.metric.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "Value".into(),
            rows.iter().map(|r| r.value).collect::<Vec<f64>>(),
        ),
        Column::new(
            "Date".into(),
            rows.iter().map(|r| r.date.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "Fiscal Year".into(),
            rows.iter().map(|r| r.fiscal_year).collect::<Vec<i32>>(),
        ),
        Column::new(
            "Unit".into(),
            rows.iter().map(|r| r.unit.as_str()).collect::<Vec<_>>(),
        ),
    ])
}
