//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is an AnalysisRequest. Output lines are either:
//! - An AggregationResult (analysis succeeded)
//! - An ErrorOutput (input parsing or a precondition failed)
//!
//! Logs go to stderr (RUST_LOG) so stdout stays a pure JSON stream for the
//! frontend driving this process.

use crash_engine::types::ErrorOutput;
use crash_engine::{AnalysisRequest, Engine, EngineError};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let engine = Engine::with_defaults();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "crash-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    // Parse the request.
    let request: AnalysisRequest = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
    };

    // Run the analysis.
    match engine.analyze(&request) {
      Ok(result) => {
        let _ = serde_json::to_writer(&mut out, &result);
        let _ = writeln!(out);
      }
      Err(e) => {
        let err = match &e {
          EngineError::Validation { field, reason } => {
            ErrorOutput::new(reason.clone()).with_field(field.clone())
          }
          _ => ErrorOutput::new(e.to_string()),
        };
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
      }
    }
  }

  let _ = out.flush();
}
