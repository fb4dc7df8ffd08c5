//! Normalize inbound rows and date sets into canonical internal models.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;

use crate::error::EngineError;
use crate::types::{EventType, InboundRow, LogRow};

/// Parse a calendar day from an RFC3339 timestamp (time of day stripped, UTC)
/// or a plain YYYY-MM-DD date.
fn parse_day(s: &str) -> Option<NaiveDate> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.with_timezone(&Utc).date_naive());
  }
  NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse and normalize an InboundRow into a canonical LogRow.
pub fn normalize_row(raw: &InboundRow) -> Result<LogRow, EngineError> {
  if raw.source_name.is_empty() {
    return Err(EngineError::validation("source_name", "must not be empty"));
  }

  let occurred_on = parse_day(&raw.occurred_on).ok_or_else(|| {
    EngineError::validation("occurred_on", "expected RFC3339 or YYYY-MM-DD")
  })?;

  // Unmapped type labels become Unknown (the exporter does the same with
  // unmapped OS codes), never an error.
  let event_type =
    EventType::from_str_loose(&raw.event_type).unwrap_or(EventType::Unknown);

  Ok(LogRow {
    event_id: raw.event_id,
    source_name: raw.source_name.clone(),
    description: raw.description.clone().unwrap_or_default(),
    string_inserts: raw.string_inserts.clone(),
    occurred_on,
    event_type,
  })
}

/// Parse a caller-supplied date set. Empty sets are rejected up front: an
/// empty side would make the whole partition step meaningless.
pub fn parse_date_set(
  values: &[String],
  field: &str,
) -> Result<BTreeSet<NaiveDate>, EngineError> {
  if values.is_empty() {
    return Err(EngineError::validation(field, "at least one date required"));
  }
  values
    .iter()
    .map(|v| {
      parse_day(v).ok_or_else(|| {
        EngineError::validation(field, &format!("invalid date {:?}: expected RFC3339 or YYYY-MM-DD", v))
      })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw(description: Option<&str>, occurred_on: &str, event_type: &str) -> InboundRow {
    InboundRow {
      event_id: 41,
      source_name: "disk".into(),
      description: description.map(Into::into),
      string_inserts: vec![],
      occurred_on: occurred_on.into(),
      event_type: event_type.into(),
    }
  }

  #[test]
  fn rfc3339_timestamp_strips_time_of_day() {
    let row = normalize_row(&raw(Some("boom"), "2025-02-11T13:45:02Z", "error")).unwrap();
    assert_eq!(row.occurred_on, NaiveDate::from_ymd_opt(2025, 2, 11).unwrap());
  }

  #[test]
  fn plain_date_accepted() {
    let row = normalize_row(&raw(Some("boom"), "2025-02-11", "error")).unwrap();
    assert_eq!(row.occurred_on, NaiveDate::from_ymd_opt(2025, 2, 11).unwrap());
  }

  #[test]
  fn bad_date_names_the_field() {
    let err = normalize_row(&raw(Some("boom"), "yesterday", "error")).unwrap_err();
    assert!(err.to_string().contains("occurred_on"));
  }

  #[test]
  fn missing_description_becomes_empty_string() {
    let row = normalize_row(&raw(None, "2025-02-11", "error")).unwrap();
    assert_eq!(row.description, "");
  }

  #[test]
  fn unmapped_event_type_becomes_unknown() {
    let row = normalize_row(&raw(Some("boom"), "2025-02-11", "verbose")).unwrap();
    assert_eq!(row.event_type, EventType::Unknown);
  }

  #[test]
  fn empty_source_name_rejected() {
    let mut r = raw(Some("boom"), "2025-02-11", "error");
    r.source_name = String::new();
    let err = normalize_row(&r).unwrap_err();
    assert!(err.to_string().contains("source_name"));
  }

  #[test]
  fn empty_date_set_rejected() {
    let err = parse_date_set(&[], "crash_dates").unwrap_err();
    assert!(err.to_string().contains("crash_dates"));
  }

  #[test]
  fn date_set_dedupes_and_parses_both_grammars() {
    let set = parse_date_set(
      &["2025-02-11".into(), "2025-02-11T08:00:00Z".into()],
      "crash_dates",
    )
    .unwrap();
    assert_eq!(set.len(), 1);
  }
}
