//! Keyword classifiers.
//!
//! Each classifier is an ordered table of [`KeywordRule`]s evaluated first
//! match wins over lowercased text. Matching is by plain substring, not word
//! boundary, so short abbreviations (`fr`, `dr`, `k`) fire inside longer words.
//! Table order is therefore part of the behaviour: `"free"` also contains `fr`,
//! `"fly"` is reached only when nothing earlier matched, and so on.
//!
//! - `stroke.rs`: stroke, defaulting to freestyle.
//! - `stroke_type.rs`: drill / kick / scull, defaulting to normal.
//! - `intensity.rs`: heart rate patterns, effort words, then the colour
//!   vocabulary of the active intensity system.

#[path = "rules/intensity.rs"]
mod intensity;
#[path = "rules/stroke.rs"]
mod stroke;
#[path = "rules/stroke_type.rs"]
mod stroke_type;
#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

pub(crate) use intensity::classify_intensity;
pub(crate) use stroke::{classify_stroke, stroke_keyword};
pub(crate) use stroke_type::{classify_stroke_type, stroke_type_keyword};

/// Ordered-table entry: any of `keywords` occurring in the text yields `value`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeywordRule<T: 'static> {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub value: T,
}

impl<T: Copy> KeywordRule<T> {
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|kw| lower.contains(kw))
    }
}

/// First rule in `table` whose keywords occur in `lower`.
pub(crate) fn first_match<T: Copy>(table: &[KeywordRule<T>], lower: &str) -> Option<T> {
    let rule = table.iter().find(|rule| rule.matches(lower))?;
    tracing::trace!(rule = rule.name, "keyword rule matched");
    Some(rule.value)
}
