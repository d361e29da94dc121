//! Set parser: classifies one logical unit into [`ParsedSet`]s.
//!
//! Distances returned here are before the unit's repeat count is applied.

use super::distance::expression_distance;
use super::scanner::Diagnostic;
use super::trigger::{CLOSE_BRACKETS, OPEN_BRACKETS};
use crate::error::ParseError;
use crate::rules::{classify_intensity, classify_stroke, classify_stroke_type, stroke_keyword, stroke_type_keyword};
use crate::workout::{IntensitySystem, ParsedSet};

/// Parse a plain line. Stroke, modifier and intensity are read from the whole
/// line, whichever tokens carried the distance.
pub(crate) fn parse_line(
    text: &str,
    line: usize,
    system: IntensitySystem,
    notes: &mut Vec<Diagnostic>,
) -> Result<ParsedSet, ParseError> {
    let lower = text.trim().to_lowercase();
    Ok(ParsedSet {
        distance: expression_distance(&lower, line, notes)?,
        stroke: classify_stroke(&lower),
        stroke_type: classify_stroke_type(&lower),
        intensity: classify_intensity(&lower, system),
    })
}

/// Parse a completed bracket group.
///
/// Brackets are removed and the content is split into segments on `+` and
/// newlines, one set per non-empty segment. A segment takes its own stroke and
/// modifier keywords, falling back to the whole group text, so
/// `(4x50 + 100) fly` is all butterfly while `(100 fly + 100 free)` splits
/// between the two strokes. Intensity is read once from the whole group and
/// shared by every segment. The segment distances add up to the distance of
/// the whole group.
pub(crate) fn parse_group(
    content: &str,
    line: usize,
    system: IntensitySystem,
    notes: &mut Vec<Diagnostic>,
) -> Result<Vec<ParsedSet>, ParseError> {
    let group_lower = content.to_lowercase();
    let group_stroke = classify_stroke(&group_lower);
    let group_stroke_type = classify_stroke_type(&group_lower);
    let group_intensity = classify_intensity(&group_lower, system);

    let stripped: String =
        group_lower.chars().filter(|c| !OPEN_BRACKETS.contains(c) && !CLOSE_BRACKETS.contains(c)).collect();

    stripped
        .split(['+', '\n'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| -> Result<ParsedSet, ParseError> {
            Ok(ParsedSet {
                distance: expression_distance(segment, line, notes)?,
                stroke: stroke_keyword(segment).unwrap_or(group_stroke),
                stroke_type: stroke_type_keyword(segment).unwrap_or(group_stroke_type),
                intensity: group_intensity,
            })
        })
        .collect()
}
