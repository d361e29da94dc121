use super::{KeywordRule, first_match};
use crate::workout::{Effort, Intensity, IntensitySystem, InternationalZone, PolarZone};

const HEART_RATES: [u16; 9] = [150, 155, 160, 165, 170, 175, 180, 185, 190];
const HEART_RATES_BY_10: std::ops::RangeInclusive<u8> = 24..=30;

static EFFORT_RULES: [KeywordRule<Intensity>; 4] = [
    rule! { name: "easy", keywords: ["easy"], value: Intensity::Standard(Effort::Easy) },
    rule! { name: "moderate", keywords: ["moderate"], value: Intensity::Standard(Effort::Moderate) },
    rule! { name: "strong", keywords: ["strong"], value: Intensity::Standard(Effort::Strong) },
    rule! { name: "fast", keywords: ["fast"], value: Intensity::Standard(Effort::Fast) },
];

static POLAR_RULES: [KeywordRule<Intensity>; 5] = [
    rule! { name: "polar grey", keywords: ["grey"], value: Intensity::Polar(PolarZone::Grey) },
    rule! { name: "polar blue", keywords: ["blue"], value: Intensity::Polar(PolarZone::Blue) },
    rule! { name: "polar green", keywords: ["green"], value: Intensity::Polar(PolarZone::Green) },
    rule! { name: "polar orange", keywords: ["orange"], value: Intensity::Polar(PolarZone::Orange) },
    rule! { name: "polar red", keywords: ["red"], value: Intensity::Polar(PolarZone::Red) },
];

static INTERNATIONAL_RULES: [KeywordRule<Intensity>; 7] = [
    rule! { name: "international yellow", keywords: ["yellow"], value: Intensity::International(InternationalZone::Yellow) },
    rule! { name: "international white", keywords: ["white"], value: Intensity::International(InternationalZone::White) },
    rule! { name: "international pink", keywords: ["pink"], value: Intensity::International(InternationalZone::Pink) },
    rule! { name: "international red", keywords: ["red"], value: Intensity::International(InternationalZone::Red) },
    rule! { name: "international blue", keywords: ["blue"], value: Intensity::International(InternationalZone::Blue) },
    rule! { name: "international brown", keywords: ["brown"], value: Intensity::International(InternationalZone::Brown) },
    rule! { name: "international purple", keywords: ["purple"], value: Intensity::International(InternationalZone::Purple) },
];

/// Intensity annotated in `lower`, checked in order: exact heart rate
/// (`hr165`), heart rate by 10 (`hr27`), effort words, colour zones of
/// `system`.
///
/// The two heart-rate patterns are independent searches over the same text,
/// so `hr250` is rejected as an exact rate and then read as `HR 25`.
pub(crate) fn classify_intensity(lower: &str, system: IntensitySystem) -> Option<Intensity> {
    if let Some(bpm) = heart_rate_capture::<u16>(regex!(r"hr([0-9]{3})"), lower) {
        if HEART_RATES.contains(&bpm) {
            return Some(Intensity::HeartRate(bpm));
        }
    }

    if let Some(beats) = heart_rate_capture::<u8>(regex!(r"hr([0-9]{2})"), lower) {
        if HEART_RATES_BY_10.contains(&beats) {
            return Some(Intensity::HeartRateBy10(beats));
        }
    }

    if let Some(effort) = first_match(&EFFORT_RULES, lower) {
        return Some(effort);
    }

    let colours: &[KeywordRule<Intensity>] = match system {
        IntensitySystem::Polar => &POLAR_RULES,
        IntensitySystem::International => &INTERNATIONAL_RULES,
    };
    first_match(colours, lower)
}

/// Digits of the first match of `re` in `lower`, parsed.
fn heart_rate_capture<N: std::str::FromStr>(re: &regex::Regex, lower: &str) -> Option<N> {
    re.captures(lower)?.get(1)?.as_str().parse().ok()
}
