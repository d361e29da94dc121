//! Distance expressions.
//!
//! A piece of text is split on runs of whitespace and `+`. Each token is one of:
//!
//! - `4x100`, `4×100`, `4*100`: repeats times distance;
//! - `400`: a plain distance;
//! - anything else (`free`, `hr165`, `4x`, `:30`): ignored.
//!
//! The distance of the text is the sum of its tokens. A token whose digits do
//! not fit a `u64` is ignored as well and leaves a [`Diagnostic`].

use super::scanner::Diagnostic;
use crate::error::ParseError;

/// Sum of the distance tokens in `lower`. `line` is only used for reporting.
pub(crate) fn expression_distance(
    lower: &str,
    line: usize,
    notes: &mut Vec<Diagnostic>,
) -> Result<u64, ParseError> {
    regex!(r"[\s+]+")
        .split(lower)
        .filter(|token| !token.is_empty())
        .try_fold(0u64, |sum, token| -> Result<u64, ParseError> {
            let distance = token_distance(token, line, notes)?;
            sum.checked_add(distance).ok_or(ParseError::DistanceOverflow { line })
        })
}

fn token_distance(token: &str, line: usize, notes: &mut Vec<Diagnostic>) -> Result<u64, ParseError> {
    if let Some(caps) = regex!(r"^([0-9]+)[x×*]([0-9]+)$").captures(token) {
        let reps = parse_digits(&caps[1], line, notes);
        let distance = parse_digits(&caps[2], line, notes);
        let (Some(reps), Some(distance)) = (reps, distance) else {
            return Ok(0);
        };
        return reps.checked_mul(distance).ok_or(ParseError::DistanceOverflow { line });
    }

    if token.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(parse_digits(token, line, notes).unwrap_or(0));
    }

    Ok(0)
}

/// Digit run as a number; `None` (reported) when it does not fit.
pub(crate) fn parse_digits(digits: &str, line: usize, notes: &mut Vec<Diagnostic>) -> Option<u64> {
    let parsed = digits.parse().ok();
    if parsed.is_none() {
        let diagnostic = Diagnostic::NumberTooLarge { line, digits: digits.to_string() };
        tracing::warn!(%diagnostic, "workout text");
        notes.push(diagnostic);
    }
    parsed
}
