//! Rule-based parser for free-form swim workout text.
//!
//! Text such as
//!
//! ```text
//! Warm up:
//! 400 free easy
//! 4x100 back hr150
//!
//! Main set:
//! 4x (100 fly + 100 free)
//! 2x[100 breast]
//! ```
//!
//! is folded into a [`WorkoutSummary`]: total distance, distance per stroke
//! and distance per intensity label. See [`parse`].

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;
mod session;
mod summary;
mod workout;

pub use api::{Options, ParseDetails, ParseResultVerbose, UnitSummary, parse, parse_verbose_with, parse_with};
pub use engine::{Diagnostic, RunMetrics, UnitKind};
pub use error::{OptionError, ParseError};
pub use session::WorkoutSession;
pub use summary::{IntensityDistances, StrokeDistances, WorkoutSummary};
pub use workout::{
    Effort, Intensity, IntensitySystem, InternationalZone, ParsedSet, PolarZone, PoolType, Stroke, StrokeType,
};
