use super::{KeywordRule, first_match};
use crate::workout::StrokeType;

// `dr` and `k` are bare substrings and catch words like "drive" or "back".
static STROKE_TYPE_RULES: [KeywordRule<StrokeType>; 3] = [
    rule! { name: "drill", keywords: ["drill", "dr"], value: StrokeType::Drill },
    rule! { name: "kick", keywords: ["kick", "k"], value: StrokeType::Kick },
    rule! { name: "scull", keywords: ["scull"], value: StrokeType::Scull },
];

pub(crate) fn stroke_type_keyword(lower: &str) -> Option<StrokeType> {
    first_match(&STROKE_TYPE_RULES, lower)
}

pub(crate) fn classify_stroke_type(lower: &str) -> StrokeType {
    stroke_type_keyword(lower).unwrap_or(StrokeType::Normal)
}
