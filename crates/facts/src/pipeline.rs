//! Multi-entity aggregation over the per-ticker transform pipeline.

use tracing::{debug, warn};

use facts_core::{
    CombinedTable, FactsError, FactsProvider, IdentifierResolver, MetricCatalog, Observation,
    Result, SummaryRow, Ticker, TickerOutcome, TickerStatus, filter_recent, flatten_facts,
    summarize,
};

/// Result of a batch run: the combined table plus one status per ticker.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchReport {
    /// Concatenated summary rows of every successful ticker, in caller order.
    pub table: CombinedTable,
    /// Per-ticker final status, in caller order.
    pub outcomes: Vec<TickerOutcome>,
}

impl BatchReport {
    /// Number of tickers whose pipeline completed.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status.is_success())
            .count()
    }

    /// Number of tickers recorded as failures.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Sequential resolve → fetch → flatten → filter → summarize pipeline.
///
/// Generic over the resolver and fetch collaborators so the transform can be
/// exercised against fixtures. Holds no state between runs beyond its
/// configuration; observations and summary rows are rebuilt from scratch on
/// every call.
///
/// # Example
///
/// ```rust,ignore
/// use facts::{EdgarClient, FactsPipeline, StaticCikTable, Ticker};
///
/// let pipeline = FactsPipeline::new(
///     StaticCikTable::new(),
///     EdgarClient::new("MyApp/1.0 (contact@example.com)"),
/// );
/// let report = pipeline.aggregate(&[Ticker::new("AAPL")], 5, 5).await?;
/// ```
#[derive(Debug)]
pub struct FactsPipeline<R, P> {
    resolver: R,
    provider: P,
    catalog: MetricCatalog,
}

impl<R, P> FactsPipeline<R, P>
where
    R: IdentifierResolver,
    P: FactsProvider,
{
    /// Creates a pipeline with the standard US-GAAP catalog.
    #[must_use]
    pub fn new(resolver: R, provider: P) -> Self {
        Self {
            resolver,
            provider,
            catalog: MetricCatalog::us_gaap(),
        }
    }

    /// Replaces the metric catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: MetricCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The catalog this pipeline runs with.
    #[must_use]
    pub fn catalog(&self) -> &MetricCatalog {
        &self.catalog
    }

    /// Fetches one company's observations for the trailing window.
    ///
    /// Resolve → fetch → flatten → filter. The result still contains
    /// quarterly observations; only the summary reduction is annual-only.
    /// The fetch collaborator is invoked at most once and never retried.
    pub async fn company_observations(
        &self,
        ticker: &Ticker,
        years: u32,
    ) -> Result<Vec<Observation>> {
        // Input errors are rejected before any fetch happens.
        if years == 0 {
            return Err(FactsError::InvalidParameter(
                "years must be a positive integer".to_string(),
            ));
        }

        let cik = self
            .resolver
            .resolve(ticker)
            .ok_or_else(|| FactsError::TickerNotFound(ticker.to_string()))?;

        debug!(ticker = %ticker, cik = %cik, provider = self.provider.name(), "Fetching company facts");
        let document = self.provider.company_facts(&cik).await?;

        let observations = flatten_facts(&document, &self.catalog);
        if observations.is_empty() {
            return Err(FactsError::NoData(ticker.to_string()));
        }

        filter_recent(observations, years)
    }

    /// Produces one company's annual summary rows.
    pub async fn company_summary(
        &self,
        ticker: &Ticker,
        years: u32,
        max_periods: usize,
    ) -> Result<Vec<SummaryRow>> {
        if max_periods == 0 {
            return Err(FactsError::InvalidParameter(
                "max_periods must be a positive integer".to_string(),
            ));
        }

        let observations = self.company_observations(ticker, years).await?;
        Ok(summarize(
            &observations,
            ticker,
            self.catalog.canonical(),
            max_periods,
        ))
    }

    /// Runs the pipeline over every ticker, in caller order, and
    /// concatenates the per-ticker summaries into one combined table.
    ///
    /// Per-ticker failures are recorded in the outcome list and never abort
    /// the batch; only invalid caller parameters fail the whole run, and
    /// they are rejected before any fetch.
    pub async fn aggregate(
        &self,
        tickers: &[Ticker],
        years: u32,
        max_periods: usize,
    ) -> Result<BatchReport> {
        if years == 0 {
            return Err(FactsError::InvalidParameter(
                "years must be a positive integer".to_string(),
            ));
        }
        if max_periods == 0 {
            return Err(FactsError::InvalidParameter(
                "max_periods must be a positive integer".to_string(),
            ));
        }

        let mut table = CombinedTable::new();
        let mut outcomes = Vec::with_capacity(tickers.len());

        for ticker in tickers {
            match self.company_summary(ticker, years, max_periods).await {
                Ok(rows) => {
                    debug!(ticker = %ticker, rows = rows.len(), "Ticker pipeline complete");
                    outcomes.push(TickerOutcome::new(
                        ticker.clone(),
                        TickerStatus::Success { rows: rows.len() },
                    ));
                    table.extend(rows);
                }
                Err(error) => {
                    warn!(ticker = %ticker, error = %error, "Ticker pipeline failed");
                    outcomes.push(TickerOutcome::new(ticker.clone(), failure_status(error)));
                }
            }
        }

        Ok(BatchReport { table, outcomes })
    }
}

/// Maps a per-ticker pipeline error onto its reportable status.
fn failure_status(error: FactsError) -> TickerStatus {
    match error {
        FactsError::TickerNotFound(_) => TickerStatus::NotFound,
        FactsError::NoData(_) => TickerStatus::NoData,
        FactsError::Parse(reason) => TickerStatus::Malformed { reason },
        FactsError::Unavailable { reason, .. } => TickerStatus::FetchFailed { reason },
        other => TickerStatus::FetchFailed {
            reason: other.to_string(),
        },
    }
}
