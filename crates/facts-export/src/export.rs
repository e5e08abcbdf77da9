//! Export of the combined summary table.
//!
//! Exported records carry exactly the summary-row fields, in the fixed
//! column order [`SUMMARY_COLUMNS`].

use std::fs::File;
use std::io::Write;
use std::path::Path;

use facts_core::{CombinedTable, SummaryRow};
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Column order of delimited summary exports.
pub const SUMMARY_COLUMNS: [&str; 6] = ["Company", "Metric", "Value", "Date", "Fiscal Year", "Unit"];

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for [SummaryRow] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(SUMMARY_COLUMNS)?;
                for row in self {
                    let value = row.value.to_string();
                    let fiscal_year = row.fiscal_year.to_string();
                    wtr.write_record([
                        row.company.as_str(),
                        row.metric.as_str(),
                        value.as_str(),
                        row.date.as_str(),
                        fiscal_year.as_str(),
                        row.unit.as_str(),
                    ])?;
                }
                let data =
                    String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?).unwrap();
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for CombinedTable {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        self.rows().export_to_string(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facts_core::Ticker;

    fn sample_table() -> CombinedTable {
        CombinedTable::from_rows(vec![
            SummaryRow::new(
                Ticker::new("AAPL"),
                "Net Income",
                96_995_000_000.0,
                "2023-09-30",
                2023,
                "USD",
            ),
            SummaryRow::new(
                Ticker::new("MSFT"),
                "Revenue",
                211_915_000_000.0,
                "2023-06-30",
                2023,
                "USD",
            ),
        ])
    }

    #[test]
    fn test_csv_header_matches_contract() {
        let csv = sample_table().export_to_string(ExportFormat::Csv).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "Company,Metric,Value,Date,Fiscal Year,Unit");
    }

    #[test]
    fn test_csv_rows() {
        let csv = sample_table().export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.contains("AAPL,Net Income,96995000000,2023-09-30,2023,USD"));
        assert!(csv.contains("MSFT,Revenue,211915000000,2023-06-30,2023,USD"));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let csv = CombinedTable::new()
            .export_to_string(ExportFormat::Csv)
            .unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_json_export() {
        let json = sample_table().export_to_string(ExportFormat::Json).unwrap();
        assert!(json.contains("\"AAPL\""));
        assert!(json.contains("\"Net Income\""));
        assert!(json.contains("2023"));
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let json = sample_table()
            .export_to_string(ExportFormat::PrettyJson)
            .unwrap();
        assert!(json.contains("  "));
    }

    #[test]
    fn test_export_to_file() {
        use std::io::Read;

        let table = sample_table();
        let path = std::env::temp_dir().join("facts_summary_export_test.csv");

        table.export_to_file(&path, ExportFormat::Csv).unwrap();
        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert!(content.contains("AAPL"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }
}
