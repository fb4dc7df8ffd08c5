//! Core types for the crash engine (JSON contracts + internal models).

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One exported event-log row as the acquisition side serializes it.
/// Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundRow {
  /// Low 16 bits of the underlying event identifier (the exporter masks).
  pub event_id: u16,
  pub source_name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub string_inserts: Vec<String>,
  /// RFC3339 timestamp or plain YYYY-MM-DD; the time of day is discarded.
  pub occurred_on: String,
  pub event_type: String,
}

/// One analysis invocation: the row set plus the two labeled date sets.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
  pub rows: Vec<InboundRow>,
  pub crash_dates: Vec<String>,
  pub normal_dates: Vec<String>,
}

// ---------------------------------------------------------------------------
// Event type enum (closed — keeps the type table's shape deterministic)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
  AuditFailure,
  AuditSuccess,
  Information,
  Warning,
  Error,
  Unknown,
}

impl EventType {
  /// Every variant, in the order the type table renders its columns.
  pub const ALL: [EventType; 6] = [
    Self::AuditFailure,
    Self::AuditSuccess,
    Self::Information,
    Self::Warning,
    Self::Error,
    Self::Unknown,
  ];

  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.to_ascii_lowercase().as_str() {
      "audit-failure" | "audit_failure" => Some(Self::AuditFailure),
      "audit-success" | "audit_success" => Some(Self::AuditSuccess),
      "information" | "info" => Some(Self::Information),
      "warning" | "warn" => Some(Self::Warning),
      "error" | "err" => Some(Self::Error),
      "unknown" => Some(Self::Unknown),
      _ => None,
    }
  }
}

// ---------------------------------------------------------------------------
// Label (derived class of a row's calendar day)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
  Normal,
  Crash,
}

impl Label {
  /// Both labels, in the order the distribution tables render their rows.
  pub const ALL: [Label; 2] = [Self::Normal, Self::Crash];
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Canonical internal row after normalization + validation.
#[derive(Debug, Clone)]
pub struct LogRow {
  pub event_id: u16,
  pub source_name: String,
  /// Missing inbound descriptions normalize to the empty string.
  pub description: String,
  pub string_inserts: Vec<String>,
  pub occurred_on: NaiveDate,
  pub event_type: EventType,
}

/// A row plus the class its calendar day belongs to.
#[derive(Debug, Clone)]
pub struct LabeledRow {
  pub label: Label,
  pub row: LogRow,
}

/// The two partitions and their union, in input order within each.
/// Combined = crash rows first, then normal rows.
#[derive(Debug, Clone)]
pub struct Partitions {
  pub crash: Vec<LabeledRow>,
  pub normal: Vec<LabeledRow>,
  pub combined: Vec<LabeledRow>,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// One ranked description with its Bayesian lift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicativenessScore {
  pub description: String,
  pub lift: f64,
}

/// A frequent crash-day event, enriched from its representative row.
#[derive(Debug, Clone, Serialize)]
pub struct TopEvent {
  pub description: String,
  pub count: u64,
  pub source_name: String,
  pub event_id: u16,
  pub event_type: EventType,
}

/// A crash-indicative event with lift and per-partition occurrence counts.
#[derive(Debug, Clone, Serialize)]
pub struct IndicativeEvent {
  pub description: String,
  pub lift: f64,
  pub source_name: String,
  pub event_id: u16,
  pub event_type: EventType,
  pub crash_count: u64,
  pub normal_count: u64,
}

/// Per-date statistics over the combined set.
/// Histograms are ordered by descending count, first-seen ties preserved.
#[derive(Debug, Clone, Serialize)]
pub struct DateStats {
  pub row_count: u64,
  pub event_types: IndexMap<EventType, u64>,
  pub sources: IndexMap<String, u64>,
}

/// The final report. Every map iterates in a deterministic order so the
/// serialized form is byte-stable across runs.
#[derive(Debug, Clone, Serialize)]
pub struct AggregationResult {
  pub top_crash_events: Vec<TopEvent>,
  pub indicative_events: Vec<IndicativeEvent>,
  pub event_type_distribution: IndexMap<Label, IndexMap<EventType, u64>>,
  pub source_distribution: IndexMap<Label, IndexMap<String, u64>>,
  pub date_statistics: BTreeMap<NaiveDate, DateStats>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
