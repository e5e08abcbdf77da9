//! Trailing-window filtering of observations.

use chrono::{Months, NaiveDate, Utc};

use crate::error::{FactsError, Result};
use crate::types::Observation;

/// Date format used for period-end and filing dates.
const PERIOD_END_FORMAT: &str = "%Y-%m-%d";

/// Restricts observations to the trailing `years` window, ending today.
///
/// See [`filter_recent_as_of`] for the full contract; this variant anchors
/// the window at the current UTC date.
pub fn filter_recent(observations: Vec<Observation>, years: u32) -> Result<Vec<Observation>> {
    filter_recent_as_of(observations, years, Utc::now().date_naive())
}

/// Restricts observations to the trailing `years` window ending at `today`,
/// ordered by period-end date descending.
///
/// `years` must be positive; zero is rejected as
/// [`FactsError::InvalidParameter`] before any work happens. An observation
/// whose period-end date is present but unparsable is a hard failure
/// ([`FactsError::Parse`]) — it signals malformed upstream data worth
/// surfacing rather than silently dropping. Observations without a
/// period-end date cannot fall inside the window and are excluded without
/// error.
pub fn filter_recent_as_of(
    observations: Vec<Observation>,
    years: u32,
    today: NaiveDate,
) -> Result<Vec<Observation>> {
    if years == 0 {
        return Err(FactsError::InvalidParameter(
            "years must be a positive integer".to_string(),
        ));
    }

    let cutoff = trailing_cutoff(today, years);

    let mut dated = Vec::with_capacity(observations.len());
    for observation in observations {
        let Some(end) = observation.period_end.as_deref() else {
            continue;
        };
        let date = NaiveDate::parse_from_str(end, PERIOD_END_FORMAT).map_err(|e| {
            FactsError::Parse(format!(
                "unparsable period end {end:?} for {}: {e}",
                observation.metric
            ))
        })?;
        if date >= cutoff {
            dated.push((date, observation));
        }
    }

    // Stable sort: upstream order breaks ties between equal dates.
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(dated.into_iter().map(|(_, observation)| observation).collect())
}

/// Start of the trailing window: `today` minus `years` calendar years.
///
/// Calendar arithmetic, not day counting — three years before 2024-06-30 is
/// 2021-06-30 regardless of leap days in between.
#[must_use]
pub fn trailing_cutoff(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN)
}
