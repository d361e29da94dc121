use super::{KeywordRule, first_match};
use crate::workout::Stroke;

static STROKE_RULES: [KeywordRule<Stroke>; 6] = [
    rule! { name: "freestyle", keywords: ["fr", "free"], value: Stroke::Freestyle },
    rule! { name: "backstroke", keywords: ["bk", "back"], value: Stroke::Backstroke },
    rule! { name: "breaststroke", keywords: ["br", "breast"], value: Stroke::Breaststroke },
    rule! { name: "butterfly", keywords: ["fl", "fly", "butterfly"], value: Stroke::Butterfly },
    rule! { name: "im", keywords: ["im", "medley"], value: Stroke::Im },
    rule! { name: "choice", keywords: ["ch", "choice"], value: Stroke::Choice },
];

/// Stroke explicitly named in `lower`, if any.
pub(crate) fn stroke_keyword(lower: &str) -> Option<Stroke> {
    first_match(&STROKE_RULES, lower)
}

/// Stroke for `lower`; unspecified strokes count as freestyle.
pub(crate) fn classify_stroke(lower: &str) -> Stroke {
    stroke_keyword(lower).unwrap_or(Stroke::Freestyle)
}
