use crate::engine::{self, Diagnostic, RunMetrics, UnitKind, UnitRun};
use crate::error::ParseError;
use crate::summary::WorkoutSummary;
use crate::workout::{IntensitySystem, ParsedSet};
use std::time::Duration;

/// Options that affect parsing.
///
/// Pool type is deliberately absent: it only changes the unit label a caller
/// prints next to the numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Colour vocabulary used to read zone words. Defaults to polar.
    pub intensity_system: IntensitySystem,
}

impl Options {
    pub fn new(intensity_system: IntensitySystem) -> Self {
        Options { intensity_system }
    }
}

/// One logical unit of the input and what it contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSummary {
    pub kind: UnitKind,
    /// 1-based line span of the unit.
    pub start_line: usize,
    pub end_line: usize,
    /// Unit text (bracket groups keep their brackets and line breaks).
    pub text: String,
    /// Repeat count applied to every set of the unit.
    pub multiplier: u64,
    /// Sets with the repeat count already applied. Zero-distance sets are kept
    /// here but never reach the summary.
    pub sets: Vec<ParsedSet>,
}

impl UnitSummary {
    pub fn distance(&self) -> u64 {
        self.sets.iter().map(|set| set.distance).sum()
    }
}

/// Additional details returned by [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    pub units: Vec<UnitSummary>,
    /// Soft warnings (unclosed groups, unused repeats). Never fatal.
    pub diagnostics: Vec<Diagnostic>,
    pub metrics: RunMetrics,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub text: String,
    pub summary: WorkoutSummary,
    pub elapsed: Duration,
    pub details: ParseDetails,
}

/// Parse workout `text`, reading colour words with `intensity_system`.
///
/// Unknown words are ignored and unclosed bracket groups are dropped; the only
/// error is a number or total too large to represent.
///
/// # Example
/// ```
/// use swimtally::{IntensitySystem, Stroke, parse};
///
/// let summary = parse("400 free\n4x (100 fly + 100 free)", IntensitySystem::Polar).unwrap();
/// assert_eq!(summary.total_distance, 1200);
/// assert_eq!(summary.stroke_distances.get(Stroke::Butterfly), 400);
/// ```
pub fn parse(text: &str, intensity_system: IntensitySystem) -> Result<WorkoutSummary, ParseError> {
    parse_with(text, &Options::new(intensity_system))
}

/// Parse workout `text` with the provided `options`.
pub fn parse_with(text: &str, options: &Options) -> Result<WorkoutSummary, ParseError> {
    engine::Parser::new(text, options.intensity_system).run()
}

/// Parse `text` and return the summary together with a per-unit trace,
/// diagnostics and run metrics.
pub fn parse_verbose_with(text: &str, options: &Options) -> Result<ParseResultVerbose, ParseError> {
    let run = engine::Parser::new(text, options.intensity_system).run_with_metrics()?;

    let details = ParseDetails {
        units: run.units.into_iter().map(unit_to_summary).collect(),
        diagnostics: run.diagnostics,
        metrics: run.metrics,
    };

    Ok(ParseResultVerbose {
        text: text.to_string(),
        summary: run.summary,
        elapsed: details.metrics.total,
        details,
    })
}

fn unit_to_summary(run: UnitRun) -> UnitSummary {
    let UnitRun { unit, sets } = run;
    UnitSummary {
        kind: unit.kind,
        start_line: unit.start_line,
        end_line: unit.end_line,
        text: unit.text,
        multiplier: unit.multiplier,
        sets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::Stroke;

    #[test]
    fn parse_with_matches_parse() {
        let text = "400 free easy\n4x50 choice";
        let options = Options::new(IntensitySystem::International);
        assert_eq!(parse_with(text, &options).unwrap(), parse(text, IntensitySystem::International).unwrap());
    }

    #[test]
    fn verbose_includes_trace_and_metrics() {
        let text = "Warm up:\n400 free\n2x\n[100 breast]\n3x(200 free";
        let res = parse_verbose_with(text, &Options::default()).unwrap();

        assert_eq!(res.text, text);
        assert_eq!(res.summary.total_distance, 600);
        assert_eq!(res.summary.stroke_distances.get(Stroke::Breaststroke), 200);
        assert_eq!(res.elapsed, res.details.metrics.total);

        let units = &res.details.units;
        assert_eq!(units.len(), 3);
        assert!(units[0].sets.is_empty());
        assert_eq!(units[1].distance(), 400);
        assert_eq!((units[2].kind, units[2].multiplier, units[2].distance()), (UnitKind::Group, 2, 200));

        assert_eq!(res.details.metrics.lines, 5);
        assert_eq!(res.details.metrics.groups, 1);
        assert_eq!(res.details.metrics.sets_recorded, 2);
        assert_eq!(res.details.diagnostics, vec![Diagnostic::UnterminatedGroup { start_line: 5, depth: 1 }]);
    }
}
