#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect("literal regex must compile"));
        &*RE
    }};
}

/// Build a `KeywordRule`: a named list of substrings that, when any of them
/// occurs in the lowercased text, yields `value`.
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        keywords: [ $($kw:expr),* $(,)? ],
        value: $value:expr
        $(,)?
    ) => {
        $crate::rules::KeywordRule { name: $name, keywords: &[ $($kw),* ], value: $value }
    };
}
