//! Bayesian indicativeness scoring and ranking.
//!
//! For a description D and the crash/normal two-class split, the posterior
//! P(crash|D) = P(D|crash) * P(crash) / P(D). The reported lift is the ratio
//! of that posterior to the prior P(crash): how much more likely the
//! description makes a crash day compared to picking a day at random.

use crate::counts::DescriptionCounts;
use crate::types::IndicativenessScore;

/// Lift of one description: P(crash|desc) / P(crash).
///
/// Non-empty partitions are the caller's precondition (the partitioner
/// rejects empty ones before scoring is reachable).
pub fn lift(
  description: &str,
  crash: &DescriptionCounts,
  crash_len: usize,
  combined: &DescriptionCounts,
  combined_len: usize,
) -> f64 {
  debug_assert!(crash_len > 0, "crash partition must be non-empty");
  debug_assert!(combined_len > 0, "combined set must be non-empty");

  let p_crash = crash_len as f64 / combined_len as f64;
  let p_desc_given_crash = crash.count_of(description) as f64 / crash_len as f64;
  let p_desc = combined.count_of(description) as f64 / combined_len as f64;

  // Never observed at all: no signal either way.
  if p_desc == 0.0 {
    return 0.0;
  }

  let posterior = p_desc_given_crash * p_crash / p_desc;
  if p_crash > 0.0 {
    posterior / p_crash
  } else {
    0.0
  }
}

/// Score every description seen on crash days and rank the indicative ones.
///
/// Candidates are the crash partition's distinct descriptions in first-seen
/// order; only those with lift above `min_lift` survive. Returns the full
/// ranked list; callers truncate for display.
pub fn rank_indicative(
  crash: &DescriptionCounts,
  crash_len: usize,
  combined: &DescriptionCounts,
  combined_len: usize,
  min_lift: f64,
) -> Vec<IndicativenessScore> {
  let mut scored: Vec<IndicativenessScore> = crash
    .descriptions()
    .filter_map(|desc| {
      let ratio = lift(desc, crash, crash_len, combined, combined_len);
      if ratio > min_lift {
        Some(IndicativenessScore {
          description: desc.to_string(),
          lift: ratio,
        })
      } else {
        None
      }
    })
    .collect();

  // Deterministic sort: lift desc; stable, so equal lifts keep first-seen order.
  scored.sort_by(|a, b| b.lift.partial_cmp(&a.lift).unwrap_or(std::cmp::Ordering::Equal));
  scored
}
