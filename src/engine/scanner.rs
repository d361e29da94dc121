//! Line scanner: turns raw text into logical units.
//!
//! Lines are processed in order with a small explicit state:
//!
//! ```text
//! pending repeat : Option<(count, line)>   set by "4x" / "4x (" lines
//! open group     : Option<OpenGroup>       bracket text + running depth
//! ```
//!
//! While no group is open, the first matching case wins:
//!
//! 1. `4x (...`  repeat marker followed by a bracket: remember the repeat and
//!    open a group seeded from the bracket onwards.
//! 2. `4x`       bare repeat marker: remember the repeat, emit nothing.
//! 3. `(...`     line opens with a bracket: open a group, keep any pending
//!    repeat (so `4x` on its own line applies to the group below it).
//! 4. anything else is a plain line unit; the pending repeat is consumed even
//!    when the line turns out to carry no distance (reported as
//!    [`Diagnostic::UnusedRepeat`] when the unit has no digits at all).
//!
//! While a group is open every line is appended (newline-joined) and the depth
//! updated; the group becomes a unit as soon as the depth is exactly zero,
//! including on the line that opened it. A group still open at end of input is
//! dropped and reported as [`Diagnostic::UnterminatedGroup`].
//!
//! A repeat count too large for a `u64` is reported and ignored, so the line
//! or group after it counts once.

use super::distance::parse_digits;
use super::trigger::LineTriggers;
use std::fmt;

/// Whether a unit came from a single line or a bracket group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Line,
    Group,
}

/// Atomic piece of text handed to the set parser, with the repeat count that
/// scales it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalUnit {
    pub kind: UnitKind,
    /// Trimmed line, or the group text from its opening bracket on.
    pub text: String,
    /// 1-based first line of the unit.
    pub start_line: usize,
    /// 1-based last line of the unit.
    pub end_line: usize,
    pub multiplier: u64,
}

/// Non-fatal finding about the input. Never changes the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Input ended while a bracket group was still open; the group was dropped.
    UnterminatedGroup { start_line: usize, depth: i64 },
    /// A repeat marker was replaced by another one, was used up by a unit
    /// without digits (a heading), or input ended before any unit used it.
    UnusedRepeat { line: usize, count: u64 },
    /// A digit run does not fit a `u64`; it counts as no distance.
    NumberTooLarge { line: usize, digits: String },
}

impl Diagnostic {
    /// 1-based line the finding points at.
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::UnterminatedGroup { start_line, .. } => *start_line,
            Diagnostic::UnusedRepeat { line, .. } | Diagnostic::NumberTooLarge { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnterminatedGroup { start_line, depth } => write!(
                f,
                "line {start_line}: bracket group is never closed ({depth} still open); it was not counted"
            ),
            Diagnostic::UnusedRepeat { line, count } => {
                write!(f, "line {line}: repeat {count}x does not apply to any set")
            }
            Diagnostic::NumberTooLarge { line, digits } => {
                write!(f, "line {line}: number `{digits}` is too large and was ignored")
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingRepeat {
    count: u64,
    line: usize,
}

#[derive(Debug)]
struct OpenGroup {
    content: String,
    depth: i64,
    start_line: usize,
}

/// Everything the scanner learned about an input.
#[derive(Debug, Default)]
pub(crate) struct ScanOutput {
    pub units: Vec<LogicalUnit>,
    pub diagnostics: Vec<Diagnostic>,
    pub lines: usize,
    pub blank_lines: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Scanner {
    pending: Option<PendingRepeat>,
    group: Option<OpenGroup>,
    out: ScanOutput,
}

impl Scanner {
    /// Scan `input` into logical units.
    pub fn scan(input: &str) -> ScanOutput {
        let mut scanner = Scanner::default();
        for (idx, raw) in input.lines().enumerate() {
            scanner.out.lines += 1;
            scanner.line(raw.trim(), idx + 1);
        }
        scanner.finish()
    }

    fn line(&mut self, line: &str, number: usize) {
        if line.is_empty() {
            self.out.blank_lines += 1;
            tracing::trace!(line = number, "blank line");
            return;
        }

        let triggers = LineTriggers::scan(line);

        if let Some(group) = self.group.as_mut() {
            group.content.push('\n');
            group.content.push_str(line);
            group.depth += triggers.bracket_balance(line);
            tracing::trace!(line = number, depth = group.depth, "group continues");
            self.close_group_if_balanced(number);
            return;
        }

        if triggers.may_be_repeat_marker() {
            if let Some(caps) = regex!(r"^([0-9]+)\s*[x×*]\s*[(\[{]").captures(line) {
                if let Some(count) = parse_digits(&caps[1], number, &mut self.out.diagnostics) {
                    self.set_pending(count, number);
                }
                // The match ends just past the (single-byte) bracket.
                let seed = &line[caps.get(0).map_or(0, |m| m.end() - 1)..];
                self.open_group(seed, number);
                return;
            }

            if let Some(caps) = regex!(r"^([0-9]+)\s*[x×*]\s*$").captures(line) {
                if let Some(count) = parse_digits(&caps[1], number, &mut self.out.diagnostics) {
                    tracing::trace!(line = number, count, "repeat marker");
                    self.set_pending(count, number);
                }
                return;
            }
        }

        if line.starts_with(super::trigger::OPEN_BRACKETS) {
            self.open_group(line, number);
            return;
        }

        let multiplier = self.take_multiplier(triggers.contains(LineTriggers::HAS_DIGITS));
        self.out.units.push(LogicalUnit {
            kind: UnitKind::Line,
            text: line.to_string(),
            start_line: number,
            end_line: number,
            multiplier,
        });
    }

    fn set_pending(&mut self, count: u64, line: usize) {
        if let Some(previous) = self.pending.replace(PendingRepeat { count, line }) {
            self.report(Diagnostic::UnusedRepeat { line: previous.line, count: previous.count });
        }
    }

    /// Use up the pending repeat for the next unit. A unit without digits
    /// still consumes it, but the repeat is reported as unused.
    fn take_multiplier(&mut self, has_digits: bool) -> u64 {
        let Some(pending) = self.pending.take() else {
            return 1;
        };
        if !has_digits {
            self.report(Diagnostic::UnusedRepeat { line: pending.line, count: pending.count });
        }
        pending.count
    }

    fn open_group(&mut self, seed: &str, number: usize) {
        let depth = LineTriggers::scan(seed).bracket_balance(seed);
        tracing::trace!(line = number, depth, "group opens");
        self.group = Some(OpenGroup { content: seed.to_string(), depth, start_line: number });
        self.close_group_if_balanced(number);
    }

    fn close_group_if_balanced(&mut self, number: usize) {
        if self.group.as_ref().is_none_or(|group| group.depth != 0) {
            return;
        }
        let Some(group) = self.group.take() else {
            return;
        };
        let has_digits = LineTriggers::scan(&group.content).contains(LineTriggers::HAS_DIGITS);
        let multiplier = self.take_multiplier(has_digits);
        self.out.units.push(LogicalUnit {
            kind: UnitKind::Group,
            text: group.content,
            start_line: group.start_line,
            end_line: number,
            multiplier,
        });
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "workout text");
        self.out.diagnostics.push(diagnostic);
    }

    fn finish(mut self) -> ScanOutput {
        if let Some(group) = self.group.take() {
            // The pending repeat belonged to the dropped group.
            self.pending = None;
            self.report(Diagnostic::UnterminatedGroup { start_line: group.start_line, depth: group.depth });
        }
        if let Some(pending) = self.pending.take() {
            self.report(Diagnostic::UnusedRepeat { line: pending.line, count: pending.count });
        }
        self.out
    }
}
