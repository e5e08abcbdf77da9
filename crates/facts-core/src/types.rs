//! Core data types for company-facts summaries.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Ticker`] - Company ticker symbol
//! - [`Cik`] - SEC Central Index Key
//! - [`FilingForm`] - Recognized periodic filing forms
//! - [`Observation`] - A single flattened fact observation
//! - [`SummaryRow`] - One canonical metric value for one fiscal year
//! - [`CombinedTable`] - Ordered collection of summary rows with grouping helpers
//! - [`TickerOutcome`] - Per-ticker result of a batch run

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A company ticker symbol.
///
/// Tickers are automatically uppercased on creation, which makes every
/// downstream lookup case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    /// Creates a new ticker from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().to_uppercase())
    }

    /// Returns the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Ticker {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// SEC Central Index Key identifying a reporting entity.
///
/// CIKs are zero-padded to ten digits on creation, the width the EDGAR API
/// expects in document URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cik(String);

impl Cik {
    /// Creates a new CIK, zero-padding to ten digits.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(format!("{:0>10}", s.into()))
    }

    /// Returns the CIK as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Cik {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Cik {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// The recognized periodic filing forms.
///
/// Facts filed on any other form are dropped during flattening.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingForm {
    /// Annual report (10-K).
    #[default]
    Annual,
    /// Quarterly report (10-Q).
    Quarterly,
}

impl FilingForm {
    /// Parses a form string; unrecognized forms yield `None`.
    #[must_use]
    pub fn from_form(form: &str) -> Option<Self> {
        match form {
            "10-K" => Some(Self::Annual),
            "10-Q" => Some(Self::Quarterly),
            _ => None,
        }
    }

    /// Returns the form string as filed.
    #[must_use]
    pub const fn as_form(&self) -> &'static str {
        match self {
            Self::Annual => "10-K",
            Self::Quarterly => "10-Q",
        }
    }

    /// Returns true for annual reports.
    #[must_use]
    pub const fn is_annual(&self) -> bool {
        matches!(self, Self::Annual)
    }
}

/// A single metric observation flattened out of a company-facts document.
///
/// Value and date fields are read defensively from the document and may be
/// absent; downstream stages handle `None` without failing. Immutable once
/// created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Source metric (taxonomy concept) name.
    pub metric: String,
    /// Reported numeric value, if present.
    pub value: Option<f64>,
    /// Unit the value is denominated in (e.g. "USD").
    pub unit: String,
    /// Period-end date as reported (ISO `YYYY-MM-DD`), if present.
    pub period_end: Option<String>,
    /// Fiscal period label (e.g. "FY", "Q2"), if present.
    pub fiscal_period: Option<String>,
    /// Filing form the fact was reported on.
    pub form: FilingForm,
    /// Filer-reported fiscal year, if present.
    pub fiscal_year: Option<i32>,
    /// Filing date, if present.
    pub filed: Option<String>,
}

impl Observation {
    /// Creates an observation with required fields; the rest default to absent.
    #[must_use]
    pub fn new(metric: impl Into<String>, unit: impl Into<String>, form: FilingForm) -> Self {
        Self {
            metric: metric.into(),
            value: None,
            unit: unit.into(),
            period_end: None,
            fiscal_period: None,
            form,
            fiscal_year: None,
            filed: None,
        }
    }

    /// Sets the reported value.
    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the period-end date.
    #[must_use]
    pub fn with_period_end(mut self, period_end: impl Into<String>) -> Self {
        self.period_end = Some(period_end.into());
        self
    }

    /// Sets the fiscal period label.
    #[must_use]
    pub fn with_fiscal_period(mut self, fiscal_period: impl Into<String>) -> Self {
        self.fiscal_period = Some(fiscal_period.into());
        self
    }

    /// Sets the fiscal year.
    #[must_use]
    pub const fn with_fiscal_year(mut self, fiscal_year: i32) -> Self {
        self.fiscal_year = Some(fiscal_year);
        self
    }

    /// Sets the filing date.
    #[must_use]
    pub fn with_filed(mut self, filed: impl Into<String>) -> Self {
        self.filed = Some(filed.into());
        self
    }
}

/// One canonical metric value for one company and fiscal year.
///
/// At most one row exists per (company, metric, fiscal year) triple.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Company the row belongs to.
    pub company: Ticker,
    /// Canonical metric label (e.g. "Revenue").
    pub metric: String,
    /// Reported value.
    pub value: f64,
    /// Period-end date (ISO `YYYY-MM-DD`).
    pub date: String,
    /// Filer-reported fiscal year.
    pub fiscal_year: i32,
    /// Unit the value is denominated in.
    pub unit: String,
}

impl SummaryRow {
    /// Creates a new summary row.
    #[must_use]
    pub fn new(
        company: Ticker,
        metric: impl Into<String>,
        value: f64,
        date: impl Into<String>,
        fiscal_year: i32,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            company,
            metric: metric.into(),
            value,
            date: date.into(),
            fiscal_year,
            unit: unit.into(),
        }
    }
}

/// Ordered collection of summary rows across all processed companies.
///
/// Insertion order is company processing order, then metric discovery order,
/// then descending fiscal year.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedTable {
    rows: Vec<SummaryRow>,
}

impl CombinedTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a table from a vector of rows.
    #[must_use]
    pub const fn from_rows(rows: Vec<SummaryRow>) -> Self {
        Self { rows }
    }

    /// Appends a row to the table.
    pub fn push(&mut self, row: SummaryRow) {
        self.rows.push(row);
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter()
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Consumes the table and returns the underlying vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<SummaryRow> {
        self.rows
    }

    /// Groups rows by canonical metric, preserving first-appearance order.
    ///
    /// This is the shape time-series views consume.
    #[must_use]
    pub fn by_metric(&self) -> Vec<(&str, Vec<&SummaryRow>)> {
        let mut groups: Vec<(&str, Vec<&SummaryRow>)> = Vec::new();
        for row in &self.rows {
            match groups.iter_mut().find(|(label, _)| *label == row.metric) {
                Some((_, rows)) => rows.push(row),
                None => groups.push((row.metric.as_str(), vec![row])),
            }
        }
        groups
    }

    /// Groups rows by company, preserving first-appearance order.
    ///
    /// This is the shape tabular/detail views consume.
    #[must_use]
    pub fn by_company(&self) -> Vec<(&Ticker, Vec<&SummaryRow>)> {
        let mut groups: Vec<(&Ticker, Vec<&SummaryRow>)> = Vec::new();
        for row in &self.rows {
            match groups.iter_mut().find(|(company, _)| *company == &row.company) {
                Some((_, rows)) => rows.push(row),
                None => groups.push((&row.company, vec![row])),
            }
        }
        groups
    }
}

impl IntoIterator for CombinedTable {
    type Item = SummaryRow;
    type IntoIter = std::vec::IntoIter<SummaryRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl FromIterator<SummaryRow> for CombinedTable {
    fn from_iter<I: IntoIterator<Item = SummaryRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl Extend<SummaryRow> for CombinedTable {
    fn extend<I: IntoIterator<Item = SummaryRow>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

/// Final status of one ticker in a batch run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickerStatus {
    /// The pipeline completed; `rows` summary rows were produced.
    Success {
        /// Number of summary rows contributed to the combined table.
        rows: usize,
    },
    /// The ticker is not in the identifier table.
    NotFound,
    /// The facts document could not be retrieved.
    FetchFailed {
        /// Human-readable failure description.
        reason: String,
    },
    /// The document held no recognized observations.
    NoData,
    /// Upstream data was malformed (e.g. an unparsable period-end date).
    Malformed {
        /// Human-readable failure description.
        reason: String,
    },
}

impl TickerStatus {
    /// Returns true if the ticker's pipeline completed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl fmt::Display for TickerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { rows } => write!(f, "ok ({rows} rows)"),
            Self::NotFound => write!(f, "ticker not found"),
            Self::FetchFailed { reason } => write!(f, "fetch failed: {reason}"),
            Self::NoData => write!(f, "no recent facts"),
            Self::Malformed { reason } => write!(f, "malformed data: {reason}"),
        }
    }
}

/// A ticker together with its final batch status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerOutcome {
    /// The ticker as supplied by the caller.
    pub ticker: Ticker,
    /// Final status for this ticker.
    pub status: TickerStatus,
}

impl TickerOutcome {
    /// Creates a new outcome.
    #[must_use]
    pub const fn new(ticker: Ticker, status: TickerStatus) -> Self {
        Self { ticker, status }
    }
}
