//! Split rows into crash/normal partitions by calendar-date membership.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::error::EngineError;
use crate::types::{Label, LabeledRow, LogRow, Partitions};

/// Partition rows by date membership and build the combined labeled set.
///
/// - A date in both sets is rejected before any row is touched: silently
///   picking one label would double-count the day's rows.
/// - Rows whose day is in neither set are dropped from the analysis.
/// - Combined = crash rows then normal rows, input order preserved within each.
pub fn partition(
  rows: Vec<LogRow>,
  crash_dates: &BTreeSet<NaiveDate>,
  normal_dates: &BTreeSet<NaiveDate>,
) -> Result<Partitions, EngineError> {
  if let Some(overlap) = crash_dates.intersection(normal_dates).next() {
    return Err(EngineError::AmbiguousLabel(*overlap));
  }

  let mut crash = Vec::new();
  let mut normal = Vec::new();
  for row in rows {
    if crash_dates.contains(&row.occurred_on) {
      crash.push(LabeledRow { label: Label::Crash, row });
    } else if normal_dates.contains(&row.occurred_on) {
      normal.push(LabeledRow { label: Label::Normal, row });
    }
  }

  if crash.is_empty() && normal.is_empty() {
    return Err(EngineError::empty_input("no rows fall on a selected date"));
  }
  // The scorer divides by the crash partition size; an empty crash side can
  // never produce a report worth returning.
  if crash.is_empty() {
    return Err(EngineError::empty_input("no rows fall on a crash date"));
  }

  let combined: Vec<LabeledRow> =
    crash.iter().cloned().chain(normal.iter().cloned()).collect();

  Ok(Partitions {
    crash,
    normal,
    combined,
  })
}
