//! Workout text engine.
//!
//! Parsing a workout is a single synchronous pass with no state shared between
//! runs:
//!
//! ```text
//! raw text
//!    │  LineTriggers::scan              (trigger.rs)
//!    │    - cheap per-line feature bits
//!    v
//! Scanner::scan                         (scanner.rs)
//!    - blank lines skipped
//!    - repeat markers ("4x") held as the pending multiplier
//!    - bracket groups ((), [], {}) collected until balanced
//!    - unbalanced tail dropped, reported as a Diagnostic
//!    - headings that use up a repeat, reported as a Diagnostic
//!    │
//!    v  Vec<LogicalUnit>
//! parse_line / parse_group              (set_parser.rs)
//!    - distance expression              (distance.rs)
//!      (numbers too large for u64 ignored, reported as a Diagnostic)
//!    - stroke / stroke type / intensity (crate::rules)
//!    │
//!    v  Vec<ParsedSet> per unit, scaled by the unit multiplier
//! WorkoutSummary::record                (crate::summary)
//! ```
//!
//! [`Parser`] (parser.rs) drives the pipeline and optionally collects a
//! per-unit trace and [`RunMetrics`] (metrics.rs).
//!
//! ## Logging
//!
//! Scanner decisions are emitted as `tracing` events at `trace` level, each
//! logical unit at `debug`, diagnostics at `warn`.

#[path = "engine/distance.rs"]
mod distance;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/scanner.rs"]
mod scanner;
#[path = "engine/set_parser.rs"]
mod set_parser;
#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;
#[path = "engine/trigger.rs"]
mod trigger;

pub use metrics::{RunMetrics, UnitRun};
pub use parser::Parser;
pub use scanner::{Diagnostic, UnitKind};
