//! Engine configuration with sane defaults.

/// Tunable knobs for report assembly.
#[derive(Debug, Clone)]
pub struct Config {
  /// How many entries each top list carries (crash events, indicative events).
  pub top_events: usize,
  /// Minimum lift for a description to count as crash-indicative.
  /// 1.0 means "more common on crash days than the base rate predicts".
  pub min_lift: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      top_events: 10,
      min_lift: 1.0,
    }
  }
}
