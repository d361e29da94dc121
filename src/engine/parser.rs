//! Parser: drives scanner, set parser and aggregation for one input.
//!
//! ```text
//! new() -> run()              -> WorkoutSummary
//!       └> run_with_metrics() -> RunResult (summary + trace + metrics)
//! ```
//!
//! A `Parser` borrows its input and owns nothing else; every run builds its own
//! scan state and summary, so runs never interfere and the output depends only
//! on the text and the intensity system.

use super::metrics::{RunMetrics, RunResult, UnitRun};
use super::scanner::{Diagnostic, LogicalUnit, Scanner, UnitKind};
use super::set_parser::{parse_group, parse_line};
use super::trigger::LineTriggers;
use crate::error::ParseError;
use crate::summary::WorkoutSummary;
use crate::workout::{IntensitySystem, ParsedSet};
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    input: &'a str,
    system: IntensitySystem,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, system: IntensitySystem) -> Self {
        Parser { input, system }
    }

    /// Parse the input into a fresh summary.
    pub fn run(&self) -> Result<WorkoutSummary, ParseError> {
        self.run_with_metrics().map(|result| result.summary)
    }

    /// Parse the input, keeping the per-unit trace, diagnostics and counters.
    pub fn run_with_metrics(&self) -> Result<RunResult, ParseError> {
        let started = Instant::now();
        let scan = Scanner::scan(self.input);
        let scan_time = started.elapsed();

        let mut summary = WorkoutSummary::new();
        let mut metrics = RunMetrics {
            scan: scan_time,
            lines: scan.lines,
            blank_lines: scan.blank_lines,
            units: scan.units.len(),
            groups: scan.units.iter().filter(|unit| unit.kind == UnitKind::Group).count(),
            ..RunMetrics::default()
        };

        let mut diagnostics = scan.diagnostics;
        let mut units = Vec::with_capacity(scan.units.len());
        for unit in scan.units {
            let sets = self.unit_sets(&unit, &mut diagnostics)?;
            for set in &sets {
                let recorded = summary
                    .record(set)
                    .map_err(|_| ParseError::DistanceOverflow { line: unit.start_line })?;
                if recorded {
                    metrics.sets_recorded += 1;
                } else {
                    metrics.sets_skipped += 1;
                }
            }
            tracing::debug!(
                line = unit.start_line,
                kind = ?unit.kind,
                multiplier = unit.multiplier,
                distance = sets.iter().map(|set| set.distance).sum::<u64>(),
                "logical unit"
            );
            units.push(UnitRun { unit, sets });
        }

        // Scanner findings come first; keep the list in line order.
        diagnostics.sort_by_key(Diagnostic::line);
        metrics.total = started.elapsed();
        tracing::debug!(
            total = summary.total_distance,
            units = metrics.units,
            intensities = summary.intensity_distances.len(),
            "workout parsed"
        );

        Ok(RunResult { summary, units, diagnostics, metrics })
    }

    /// Sets of one unit with the unit's repeat count applied.
    fn unit_sets(&self, unit: &LogicalUnit, notes: &mut Vec<Diagnostic>) -> Result<Vec<ParsedSet>, ParseError> {
        // No digits, no distance: nothing here can reach the summary.
        if !LineTriggers::scan(&unit.text).contains(LineTriggers::HAS_DIGITS) {
            return Ok(Vec::new());
        }

        let sets = match unit.kind {
            UnitKind::Line => vec![parse_line(&unit.text, unit.start_line, self.system, notes)?],
            UnitKind::Group => parse_group(&unit.text, unit.start_line, self.system, notes)?,
        };

        sets.into_iter()
            .map(|set| -> Result<ParsedSet, ParseError> {
                let distance = set
                    .distance
                    .checked_mul(unit.multiplier)
                    .ok_or(ParseError::DistanceOverflow { line: unit.start_line })?;
                Ok(ParsedSet { distance, ..set })
            })
            .collect()
    }
}
