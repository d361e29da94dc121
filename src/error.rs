use thiserror::Error;

/// Fault that aborts a whole parse.
///
/// Ordinary malformed input never produces one of these: unknown words and
/// oversized numbers are ignored, unbalanced groups are dropped. Only totals
/// that cannot be represented end the run. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: distance overflowed while applying repeat counts")]
    DistanceOverflow { line: usize },
}

/// Rejected setting value (intensity system or pool type).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown intensity system `{0}` (expected `polar` or `international`)")]
    UnknownIntensitySystem(String),

    #[error("unknown pool type `{0}` (expected SCY, SCM or LCM)")]
    UnknownPoolType(String),
}
