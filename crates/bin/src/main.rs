//! Facts CLI binary.
//!
//! Command-line interface for the company-facts summary pipeline.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use facts::{
    EdgarClient, ExportFormat, Exporter, FactsPipeline, StaticCikTable, Ticker, summary_frame,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "facts")]
#[command(about = "SEC company-facts summaries from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the companies available for lookup
    List,

    /// Fetch and summarize company financials
    Summary {
        /// Ticker symbols to analyze, in display order
        #[arg(required = true)]
        tickers: Vec<String>,

        /// Trailing window of data in years
        #[arg(long, default_value = "5")]
        years: u32,

        /// Most recent fiscal years to keep per metric
        #[arg(long, default_value = "5")]
        periods: usize,

        /// Write the combined table to this file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format (csv, json, or pretty-json)
        #[arg(long, default_value = "csv")]
        format: String,

        /// User agent sent to the SEC API (the SEC requires a contact)
        #[arg(long, default_value = "facts/0.1 (data@factordynamics.dev)")]
        user_agent: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => list_companies(),
        Commands::Summary {
            tickers,
            years,
            periods,
            export,
            format,
            user_agent,
        } => {
            run_summary(tickers, years, periods, export, &format, &user_agent).await?;
        }
    }

    Ok(())
}

fn list_companies() {
    let table = StaticCikTable::new();
    println!("{:<8} {:<12} NAME", "TICKER", "CIK");
    for company in table.companies() {
        println!("{:<8} {:<12} {}", company.ticker, company.cik, company.name);
    }
}

async fn run_summary(
    tickers: Vec<String>,
    years: u32,
    periods: usize,
    export: Option<PathBuf>,
    format: &str,
    user_agent: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = parse_format(format)?;
    let tickers: Vec<Ticker> = tickers.into_iter().map(Ticker::new).collect();

    let pipeline = FactsPipeline::new(StaticCikTable::new(), EdgarClient::new(user_agent));
    let report = pipeline.aggregate(&tickers, years, periods).await?;

    // Every ticker's final status is reported individually.
    for outcome in &report.outcomes {
        println!("{:<8} {}", outcome.ticker, outcome.status);
    }
    println!();

    if report.table.is_empty() {
        return Err("no data was successfully extracted".into());
    }

    let frame = summary_frame(&report.table)?;
    println!("{frame}");

    // Time-series view, one block per canonical metric.
    for (metric, rows) in report.table.by_metric() {
        println!("\n{metric}");
        for row in rows {
            println!(
                "  {:<8} FY{}  {:>24} {}",
                row.company,
                row.fiscal_year,
                format_value(row.value),
                row.unit
            );
        }
    }

    if let Some(path) = export {
        report.table.export_to_file(&path, format)?;
        println!("\nWrote {} rows to {}", report.table.len(), path.display());
    }

    Ok(())
}

fn parse_format(format: &str) -> Result<ExportFormat, Box<dyn std::error::Error>> {
    match format {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        "pretty-json" => Ok(ExportFormat::PrettyJson),
        other => Err(format!("unknown export format: {other}").into()),
    }
}

/// Groups money-scale values by thousands; small values print as-is.
fn format_value(value: f64) -> String {
    if value.abs() < 1000.0 {
        return value.to_string();
    }
    let negative = value < 0.0;
    let whole = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
