//! Workout vocabulary: strokes, stroke-type modifiers, intensity labels and
//! the two caller-selected settings (intensity system and pool type).

use crate::error::OptionError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Swim stroke a distance is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stroke {
    Freestyle,
    Backstroke,
    Breaststroke,
    Butterfly,
    Im,
    Choice,
}

impl Stroke {
    /// All strokes in canonical (summary) order.
    pub const ALL: [Stroke; 6] =
        [Stroke::Freestyle, Stroke::Backstroke, Stroke::Breaststroke, Stroke::Butterfly, Stroke::Im, Stroke::Choice];

    pub fn name(self) -> &'static str {
        match self {
            Stroke::Freestyle => "freestyle",
            Stroke::Backstroke => "backstroke",
            Stroke::Breaststroke => "breaststroke",
            Stroke::Butterfly => "butterfly",
            Stroke::Im => "im",
            Stroke::Choice => "choice",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Modifier layered on top of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeType {
    Drill,
    Kick,
    Scull,
    Normal,
}

impl StrokeType {
    pub fn name(self) -> &'static str {
        match self {
            StrokeType::Drill => "drill",
            StrokeType::Kick => "kick",
            StrokeType::Scull => "scull",
            StrokeType::Normal => "normal",
        }
    }
}

/// Word-based effort levels, valid in both intensity systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effort {
    Easy,
    Moderate,
    Strong,
    Fast,
}

impl Effort {
    pub fn name(self) -> &'static str {
        match self {
            Effort::Easy => "easy",
            Effort::Moderate => "moderate",
            Effort::Strong => "strong",
            Effort::Fast => "fast",
        }
    }
}

/// Polar training zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarZone {
    Grey,
    Blue,
    Green,
    Orange,
    Red,
}

impl PolarZone {
    pub fn name(self) -> &'static str {
        match self {
            PolarZone::Grey => "grey",
            PolarZone::Blue => "blue",
            PolarZone::Green => "green",
            PolarZone::Orange => "orange",
            PolarZone::Red => "red",
        }
    }
}

/// International colour-coded training zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternationalZone {
    Yellow,
    White,
    Pink,
    Red,
    Blue,
    Brown,
    Purple,
}

impl InternationalZone {
    pub fn name(self) -> &'static str {
        match self {
            InternationalZone::Yellow => "yellow",
            InternationalZone::White => "white",
            InternationalZone::Pink => "pink",
            InternationalZone::Red => "red",
            InternationalZone::Blue => "blue",
            InternationalZone::Brown => "brown",
            InternationalZone::Purple => "purple",
        }
    }
}

/// Intensity annotation recognised on a set.
///
/// Heart-rate values are only ever constructed from the accepted sets
/// (`150, 155, .., 190` and `24..=30`); see `rules::intensity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    HeartRate(u16),
    HeartRateBy10(u8),
    Standard(Effort),
    Polar(PolarZone),
    International(InternationalZone),
}

impl fmt::Display for Intensity {
    /// `HR 165` / `HR 27` for heart rates, the capitalised word otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intensity::HeartRate(bpm) => write!(f, "HR {bpm}"),
            Intensity::HeartRateBy10(beats) => write!(f, "HR {beats}"),
            Intensity::Standard(effort) => f.write_str(&capitalize(effort.name())),
            Intensity::Polar(zone) => f.write_str(&capitalize(zone.name())),
            Intensity::International(zone) => f.write_str(&capitalize(zone.name())),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Which colour vocabulary is used to read colour words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensitySystem {
    #[default]
    Polar,
    International,
}

impl IntensitySystem {
    pub fn name(self) -> &'static str {
        match self {
            IntensitySystem::Polar => "polar",
            IntensitySystem::International => "international",
        }
    }
}

impl fmt::Display for IntensitySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntensitySystem {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "polar" => Ok(IntensitySystem::Polar),
            "international" => Ok(IntensitySystem::International),
            _ => Err(OptionError::UnknownIntensitySystem(s.to_string())),
        }
    }
}

/// Pool the workout was swum in. Only decides the unit label; distances are
/// never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PoolType {
    /// Short course yards.
    Scy,
    /// Short course meters.
    Scm,
    /// Long course meters.
    #[default]
    Lcm,
}

impl PoolType {
    pub fn unit_label(self) -> &'static str {
        match self {
            PoolType::Scy => "yards",
            PoolType::Scm | PoolType::Lcm => "meters",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PoolType::Scy => "Short Course Yards",
            PoolType::Scm => "Short Course Meters",
            PoolType::Lcm => "Long Course Meters",
        }
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PoolType::Scy => "SCY",
            PoolType::Scm => "SCM",
            PoolType::Lcm => "LCM",
        })
    }
}

impl FromStr for PoolType {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SCY" => Ok(PoolType::Scy),
            "SCM" => Ok(PoolType::Scm),
            "LCM" => Ok(PoolType::Lcm),
            _ => Err(OptionError::UnknownPoolType(s.to_string())),
        }
    }
}

/// One classified piece of a workout: a distance with its stroke, modifier and
/// optional intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSet {
    pub distance: u64,
    pub stroke: Stroke,
    pub stroke_type: StrokeType,
    pub intensity: Option<Intensity>,
}
