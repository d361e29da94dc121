//! Workout totals and the aggregation step.
//!
//! A [`WorkoutSummary`] is rebuilt from scratch on every parse. Sets are folded
//! in document order by [`WorkoutSummary::record`]; a set with zero distance is
//! skipped entirely so it never creates an intensity key.
//!
//! Invariant: `total_distance == stroke_distances.sum()`. Every recorded
//! distance goes to exactly one stroke (freestyle when none is named).

use crate::ParsedSet;
use crate::workout::Stroke;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Distance per stroke. All six strokes are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrokeDistances {
    by_stroke: [u64; Stroke::ALL.len()],
}

impl StrokeDistances {
    pub fn get(&self, stroke: Stroke) -> u64 {
        self.by_stroke[stroke.index()]
    }

    /// `(stroke, distance)` pairs in canonical stroke order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Stroke, u64)> + '_ {
        Stroke::ALL.iter().map(|&stroke| (stroke, self.get(stroke)))
    }

    pub fn sum(&self) -> u64 {
        self.by_stroke.iter().sum()
    }

    fn add(&mut self, stroke: Stroke, distance: u64) -> Option<()> {
        let slot = &mut self.by_stroke[stroke.index()];
        *slot = slot.checked_add(distance)?;
        Some(())
    }
}

impl Serialize for StrokeDistances {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Stroke::ALL.len()))?;
        for (stroke, distance) in self.iter() {
            map.serialize_entry(stroke.name(), &distance)?;
        }
        map.end()
    }
}

/// Distance per intensity display label (`"HR 165"`, `"Easy"`, `"Grey"`, ...).
///
/// Keys keep first-seen order and only exist for labels that received a
/// non-zero distance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntensityDistances {
    entries: Vec<(String, u64)>,
}

impl IntensityDistances {
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries.iter().find(|(key, _)| key == label).map(|(_, distance)| *distance)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(key, distance)| (key.as_str(), *distance))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> u64 {
        self.entries.iter().map(|(_, distance)| distance).sum()
    }

    fn add(&mut self, label: String, distance: u64) -> Option<()> {
        match self.entries.iter_mut().find(|(key, _)| *key == label) {
            Some((_, total)) => *total = total.checked_add(distance)?,
            None => self.entries.push((label, distance)),
        }
        Some(())
    }
}

impl Serialize for IntensityDistances {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, distance) in &self.entries {
            map.serialize_entry(label, distance)?;
        }
        map.end()
    }
}

/// Aggregated totals for one workout text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkoutSummary {
    pub total_distance: u64,
    pub stroke_distances: StrokeDistances,
    pub intensity_distances: IntensityDistances,
}

/// Error from [`WorkoutSummary::record`]: a running total no longer fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TotalOverflow;

impl WorkoutSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one set (with its repeat count already applied) into the totals.
    ///
    /// Returns `Ok(false)` when the set was skipped for having no distance.
    pub(crate) fn record(&mut self, set: &ParsedSet) -> Result<bool, TotalOverflow> {
        if set.distance == 0 {
            return Ok(false);
        }

        // Check everything before mutating so a failed record leaves no partial update.
        let total = self.total_distance.checked_add(set.distance).ok_or(TotalOverflow)?;
        self.stroke_distances.get(set.stroke).checked_add(set.distance).ok_or(TotalOverflow)?;
        let label = set.intensity.map(|intensity| intensity.to_string());
        if let Some(label) = &label {
            self.intensity_distances.get(label).unwrap_or(0).checked_add(set.distance).ok_or(TotalOverflow)?;
        }

        self.total_distance = total;
        self.stroke_distances.add(set.stroke, set.distance).ok_or(TotalOverflow)?;
        if let Some(label) = label {
            self.intensity_distances.add(label, set.distance).ok_or(TotalOverflow)?;
        }
        Ok(true)
    }
}
