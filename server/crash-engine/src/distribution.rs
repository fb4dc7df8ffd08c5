//! Label×type and label×source contingency tables, plus per-date statistics.

use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeMap;

use crate::types::{DateStats, EventType, Label, LabeledRow};

/// Count of rows per (label, event type). Rows are Normal then Crash; columns
/// are the full closed enum, zero-filled, so the table shape never depends on
/// the data.
pub fn type_distribution(
  combined: &[LabeledRow],
) -> IndexMap<Label, IndexMap<EventType, u64>> {
  let zeroed: IndexMap<EventType, u64> =
    EventType::ALL.iter().map(|&t| (t, 0)).collect();
  let mut table: IndexMap<Label, IndexMap<EventType, u64>> =
    Label::ALL.iter().map(|&l| (l, zeroed.clone())).collect();

  for lr in combined {
    if let Some(cell) = table
      .get_mut(&lr.label)
      .and_then(|row| row.get_mut(&lr.row.event_type))
    {
      *cell += 1;
    }
  }
  table
}

/// Count of rows per (label, source). The source set is open-ended, so
/// columns are ordered by first occurrence across the combined set and
/// zero-filled for the label that never saw them.
pub fn source_distribution(
  combined: &[LabeledRow],
) -> IndexMap<Label, IndexMap<String, u64>> {
  let mut sources: IndexSet<&str> = IndexSet::new();
  for lr in combined {
    sources.insert(lr.row.source_name.as_str());
  }

  let zeroed: IndexMap<String, u64> =
    sources.iter().map(|&s| (s.to_string(), 0)).collect();
  let mut table: IndexMap<Label, IndexMap<String, u64>> =
    Label::ALL.iter().map(|&l| (l, zeroed.clone())).collect();

  for lr in combined {
    if let Some(cell) = table
      .get_mut(&lr.label)
      .and_then(|row| row.get_mut(lr.row.source_name.as_str()))
    {
      *cell += 1;
    }
  }
  table
}

/// Group the combined set by calendar day. Only days actually present appear;
/// histograms are ordered by descending count with first-seen ties.
pub fn date_statistics(combined: &[LabeledRow]) -> BTreeMap<NaiveDate, DateStats> {
  let mut stats: BTreeMap<NaiveDate, DateStats> = BTreeMap::new();

  for lr in combined {
    let entry = stats.entry(lr.row.occurred_on).or_insert_with(|| DateStats {
      row_count: 0,
      event_types: IndexMap::new(),
      sources: IndexMap::new(),
    });
    entry.row_count += 1;
    *entry.event_types.entry(lr.row.event_type).or_insert(0) += 1;
    *entry.sources.entry(lr.row.source_name.clone()).or_insert(0) += 1;
  }

  for day in stats.values_mut() {
    day.event_types.sort_by(|_, a, _, b| b.cmp(a));
    day.sources.sort_by(|_, a, _, b| b.cmp(a));
  }
  stats
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::LogRow;

  fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, d).unwrap()
  }

  fn labeled(label: Label, source: &str, event_type: EventType, d: u32) -> LabeledRow {
    LabeledRow {
      label,
      row: LogRow {
        event_id: 1,
        source_name: source.into(),
        description: "x".into(),
        string_inserts: vec![],
        occurred_on: day(d),
        event_type,
      },
    }
  }

  #[test]
  fn type_table_has_fixed_shape() {
    let combined = vec![
      labeled(Label::Crash, "disk", EventType::Error, 11),
      labeled(Label::Normal, "auth", EventType::Information, 13),
    ];
    let table = type_distribution(&combined);

    // Both labels, all six types, even where no rows landed.
    assert_eq!(table.len(), 2);
    for row in table.values() {
      assert_eq!(row.len(), EventType::ALL.len());
    }
    assert_eq!(table[&Label::Crash][&EventType::Error], 1);
    assert_eq!(table[&Label::Crash][&EventType::Information], 0);
    assert_eq!(table[&Label::Normal][&EventType::Information], 1);

    // Normal renders first.
    assert_eq!(table.keys().next(), Some(&Label::Normal));
  }

  #[test]
  fn source_table_orders_columns_by_first_occurrence() {
    let combined = vec![
      labeled(Label::Crash, "disk", EventType::Error, 11),
      labeled(Label::Crash, "net", EventType::Warning, 11),
      labeled(Label::Normal, "auth", EventType::Information, 13),
      labeled(Label::Normal, "disk", EventType::Information, 13),
    ];
    let table = source_distribution(&combined);

    let columns: Vec<&String> = table[&Label::Normal].keys().collect();
    assert_eq!(columns, vec!["disk", "net", "auth"]);
    assert_eq!(table[&Label::Crash]["disk"], 1);
    assert_eq!(table[&Label::Normal]["disk"], 1);
    assert_eq!(table[&Label::Normal]["net"], 0);
  }

  #[test]
  fn date_statistics_group_by_day() {
    let combined = vec![
      labeled(Label::Crash, "disk", EventType::Error, 11),
      labeled(Label::Crash, "disk", EventType::Error, 11),
      labeled(Label::Crash, "net", EventType::Warning, 11),
      labeled(Label::Normal, "auth", EventType::Information, 13),
    ];
    let stats = date_statistics(&combined);

    assert_eq!(stats.len(), 2);
    let d11 = &stats[&day(11)];
    assert_eq!(d11.row_count, 3);
    assert_eq!(d11.event_types[&EventType::Error], 2);
    assert_eq!(d11.sources["disk"], 2);

    // Histogram ordered by descending count.
    assert_eq!(d11.sources.keys().next().map(String::as_str), Some("disk"));
    assert_eq!(d11.event_types.keys().next(), Some(&EventType::Error));
  }

  #[test]
  fn absent_days_do_not_appear() {
    let combined = vec![labeled(Label::Crash, "disk", EventType::Error, 11)];
    let stats = date_statistics(&combined);
    assert_eq!(stats.len(), 1);
    assert!(stats.contains_key(&day(11)));
  }
}
