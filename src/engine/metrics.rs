//! Engine run metrics.
//!
//! `Parser::run` only builds the summary. `Parser::run_with_metrics` also
//! keeps the per-unit trace, the scanner diagnostics and a few counters; it is
//! what the CLI `--trace` output and `parse_verbose_with` are built on.

use super::scanner::{Diagnostic, LogicalUnit};
use crate::summary::WorkoutSummary;
use crate::workout::ParsedSet;
use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for `Parser::run_with_metrics`.
    pub total: Duration,
    /// Time spent splitting the text into logical units.
    pub scan: Duration,
    /// Input lines seen, blank ones included.
    pub lines: usize,
    pub blank_lines: usize,
    /// Logical units produced by the scanner (plain lines and groups).
    pub units: usize,
    /// How many of `units` were bracket groups.
    pub groups: usize,
    /// Sets that added distance to the summary.
    pub sets_recorded: usize,
    /// Sets skipped for having no distance.
    pub sets_skipped: usize,
}

/// One logical unit and the sets it produced, repeat count applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRun {
    pub unit: LogicalUnit,
    pub sets: Vec<ParsedSet>,
}

/// Parser output bundled with trace and timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub summary: WorkoutSummary,
    pub units: Vec<UnitRun>,
    pub diagnostics: Vec<Diagnostic>,
    pub metrics: RunMetrics,
}
