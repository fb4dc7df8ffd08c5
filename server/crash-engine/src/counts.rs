//! Exact description frequency counting with deterministic top-K extraction.

use indexmap::IndexMap;

use crate::types::LabeledRow;

/// Description -> occurrence count for one partition (or the combined set).
///
/// Counting is exact and case-sensitive; the empty string is a valid key.
/// The map keeps first-occurrence order, which every tie-break downstream
/// relies on.
#[derive(Debug, Clone, Default)]
pub struct DescriptionCounts {
  counts: IndexMap<String, u64>,
}

impl DescriptionCounts {
  pub fn from_rows(rows: &[LabeledRow]) -> Self {
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for lr in rows {
      *counts.entry(lr.row.description.clone()).or_insert(0) += 1;
    }
    Self { counts }
  }

  pub fn count_of(&self, description: &str) -> u64 {
    self.counts.get(description).copied().unwrap_or(0)
  }

  /// Sum of all counts; equals the row count of the source partition.
  pub fn total(&self) -> u64 {
    self.counts.values().sum()
  }

  pub fn len(&self) -> usize {
    self.counts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  /// Distinct descriptions in first-occurrence order.
  pub fn descriptions(&self) -> impl Iterator<Item = &str> {
    self.counts.keys().map(String::as_str)
  }

  /// The n most common descriptions, descending by count.
  /// Stable sort: equal counts keep first-occurrence order, so the extraction
  /// is reproducible for identical inputs.
  pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = self
      .counts
      .iter()
      .map(|(desc, count)| (desc.as_str(), *count))
      .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
  }
}
