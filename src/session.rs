//! Live summary for an editable workout text.
//!
//! A caller re-parses the whole text on every edit. When a parse fails the
//! caller keeps showing the last good summary next to the error message
//! instead of resetting to an empty one; [`WorkoutSession`] holds that state.

use crate::api::{Options, parse_with};
use crate::error::ParseError;
use crate::summary::WorkoutSummary;
use crate::workout::IntensitySystem;

#[derive(Debug, Clone, Default)]
pub struct WorkoutSession {
    options: Options,
    text: String,
    summary: WorkoutSummary,
    error: Option<ParseError>,
}

impl WorkoutSession {
    pub fn new(options: Options) -> Self {
        WorkoutSession { options, ..WorkoutSession::default() }
    }

    /// Replace the text and re-parse it from scratch.
    ///
    /// On failure the previous summary is kept and the error is remembered
    /// until the next successful update.
    pub fn update(&mut self, text: impl Into<String>) -> Result<&WorkoutSummary, &ParseError> {
        self.text = text.into();
        self.reparse()
    }

    /// Switch the colour vocabulary and re-parse the current text.
    pub fn set_intensity_system(&mut self, system: IntensitySystem) -> Result<&WorkoutSummary, &ParseError> {
        self.options.intensity_system = system;
        self.reparse()
    }

    fn reparse(&mut self) -> Result<&WorkoutSummary, &ParseError> {
        match parse_with(&self.text, &self.options) {
            Ok(summary) => {
                self.summary = summary;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "keeping previous workout summary");
                self.error = Some(err);
            }
        }
        match &self.error {
            Some(err) => Err(err),
            None => Ok(&self.summary),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Last successfully computed summary.
    pub fn summary(&self) -> &WorkoutSummary {
        &self.summary
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Inline warning text for the current error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::Stroke;

    #[test]
    fn failed_update_keeps_last_good_summary() {
        let mut session = WorkoutSession::new(Options::default());
        assert_eq!(session.update("400 free").unwrap().total_distance, 400);

        let err = session.update("400 free\n18446744073709551615x\n2x100 back").unwrap_err();
        assert_eq!(err, &ParseError::DistanceOverflow { line: 3 });
        assert_eq!(session.summary().total_distance, 400);
        assert!(session.error_message().unwrap().starts_with("line 3:"));

        session.update("400 free\n200 back").unwrap();
        assert_eq!(session.summary().stroke_distances.get(Stroke::Backstroke), 200);
        assert!(session.error().is_none());
    }

    #[test]
    fn switching_system_reparses_colours() {
        let mut session = WorkoutSession::new(Options::new(IntensitySystem::Polar));
        session.update("400 yellow").unwrap();
        assert!(session.summary().intensity_distances.is_empty());

        let summary = session.set_intensity_system(IntensitySystem::International).unwrap();
        assert_eq!(summary.intensity_distances.get("Yellow"), Some(400));
        assert_eq!(session.options().intensity_system, IntensitySystem::International);
    }
}
