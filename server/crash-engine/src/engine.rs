//! Core engine: normalizes a request, runs the pipeline, assembles the report.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

use crate::config::Config;
use crate::counts::DescriptionCounts;
use crate::distribution;
use crate::error::EngineError;
use crate::normalize;
use crate::partition;
use crate::scoring;
use crate::types::*;

/// The crash correlation engine. Holds configuration only; every analysis
/// owns its data and nothing survives across invocations.
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Process one wire-level request: normalize rows and date sets, then run
  /// the typed analysis.
  pub fn analyze(&self, request: &AnalysisRequest) -> Result<AggregationResult, EngineError> {
    let rows = request
      .rows
      .iter()
      .map(normalize::normalize_row)
      .collect::<Result<Vec<_>, _>>()?;
    let crash_dates = normalize::parse_date_set(&request.crash_dates, "crash_dates")?;
    let normal_dates = normalize::parse_date_set(&request.normal_dates, "normal_dates")?;
    self.analyze_rows(rows, &crash_dates, &normal_dates)
  }

  /// Typed entry point: labeled-date analysis over already-normalized rows.
  ///
  /// Fails fast on any precondition violation; a partial report is never
  /// returned.
  pub fn analyze_rows(
    &self,
    rows: Vec<LogRow>,
    crash_dates: &BTreeSet<NaiveDate>,
    normal_dates: &BTreeSet<NaiveDate>,
  ) -> Result<AggregationResult, EngineError> {
    let parts = partition::partition(rows, crash_dates, normal_dates)?;
    debug!(
      crash = parts.crash.len(),
      normal = parts.normal.len(),
      "partitioned rows"
    );

    let crash_counts = DescriptionCounts::from_rows(&parts.crash);
    let normal_counts = DescriptionCounts::from_rows(&parts.normal);
    let combined_counts = DescriptionCounts::from_rows(&parts.combined);

    let ranked = scoring::rank_indicative(
      &crash_counts,
      parts.crash.len(),
      &combined_counts,
      parts.combined.len(),
      self.config.min_lift,
    );
    debug!(candidates = crash_counts.len(), indicative = ranked.len(), "ranked descriptions");

    let top_crash_events = crash_counts
      .most_common(self.config.top_events)
      .into_iter()
      .filter_map(|(desc, count)| {
        representative(&parts.crash, desc).map(|rep| TopEvent {
          description: desc.to_string(),
          count,
          source_name: rep.source_name.clone(),
          event_id: rep.event_id,
          event_type: rep.event_type,
        })
      })
      .collect();

    let indicative_events = ranked
      .iter()
      .take(self.config.top_events)
      .filter_map(|score| {
        representative(&parts.crash, &score.description).map(|rep| IndicativeEvent {
          description: score.description.clone(),
          lift: score.lift,
          source_name: rep.source_name.clone(),
          event_id: rep.event_id,
          event_type: rep.event_type,
          crash_count: crash_counts.count_of(&score.description),
          normal_count: normal_counts.count_of(&score.description),
        })
      })
      .collect();

    Ok(AggregationResult {
      top_crash_events,
      indicative_events,
      event_type_distribution: distribution::type_distribution(&parts.combined),
      source_distribution: distribution::source_distribution(&parts.combined),
      date_statistics: distribution::date_statistics(&parts.combined),
    })
  }
}

/// First row in the partition bearing this description. An arbitrary but
/// deterministic choice: a description spanning several sources or event ids
/// surfaces only the first one seen.
fn representative<'a>(rows: &'a [LabeledRow], description: &str) -> Option<&'a LogRow> {
  rows
    .iter()
    .find(|lr| lr.row.description == description)
    .map(|lr| &lr.row)
}
