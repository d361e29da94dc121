use super::{classify_intensity, classify_stroke, classify_stroke_type, stroke_keyword};
use crate::workout::{Effort, Intensity, IntensitySystem, InternationalZone, PolarZone, Stroke, StrokeType};
use rstest::rstest;

#[rstest]
#[case("400 free", Stroke::Freestyle)]
#[case("4x100 fr", Stroke::Freestyle)]
#[case("4x100 back", Stroke::Backstroke)]
#[case("200 bk", Stroke::Backstroke)]
#[case("100 breast", Stroke::Breaststroke)]
#[case("8x25 br", Stroke::Breaststroke)]
#[case("100 fly", Stroke::Butterfly)]
#[case("50 butterfly", Stroke::Butterfly)]
#[case("200 im", Stroke::Im)]
#[case("400 medley", Stroke::Im)]
#[case("4x50 choice", Stroke::Choice)]
#[case("6x50 ch", Stroke::Choice)]
#[case("400", Stroke::Freestyle)]
fn stroke_keywords(#[case] text: &str, #[case] expected: Stroke) {
    assert_eq!(classify_stroke(text), expected);
}

#[rstest]
// "freestyle" outranks everything after it.
#[case("100 fly + 100 free", Stroke::Freestyle)]
// "back" is checked before "breast".
#[case("100 back 100 breast", Stroke::Backstroke)]
// "swim" contains "im".
#[case("400 swim", Stroke::Im)]
// "fr" inside "from" still counts.
#[case("200 fly from the wall", Stroke::Freestyle)]
fn stroke_priority_is_substring_first_match(#[case] text: &str, #[case] expected: Stroke) {
    assert_eq!(classify_stroke(text), expected);
}

#[test]
fn stroke_keyword_reports_absence() {
    assert_eq!(stroke_keyword("400 easy"), None);
    assert_eq!(stroke_keyword("100 fly"), Some(Stroke::Butterfly));
}

#[rstest]
#[case("4x50 drill", StrokeType::Drill)]
#[case("4x50 dr", StrokeType::Drill)]
#[case("200 kick", StrokeType::Kick)]
#[case("200 k", StrokeType::Kick)]
#[case("4x25 scull", StrokeType::Scull)]
#[case("400 free", StrokeType::Normal)]
// Broad abbreviations fire inside other words.
#[case("200 back", StrokeType::Kick)]
#[case("200 drive", StrokeType::Drill)]
fn stroke_type_keywords(#[case] text: &str, #[case] expected: StrokeType) {
    assert_eq!(classify_stroke_type(text), expected);
}

#[rstest]
#[case("300 free hr165", Intensity::HeartRate(165))]
#[case("hr150", Intensity::HeartRate(150))]
#[case("hr190 200 back", Intensity::HeartRate(190))]
#[case("4x100 hr27", Intensity::HeartRateBy10(27))]
#[case("hr24", Intensity::HeartRateBy10(24))]
#[case("hr30", Intensity::HeartRateBy10(30))]
#[case("400 easy", Intensity::Standard(Effort::Easy))]
#[case("200 moderate", Intensity::Standard(Effort::Moderate))]
#[case("100 strong", Intensity::Standard(Effort::Strong))]
#[case("50 fast", Intensity::Standard(Effort::Fast))]
#[case("400 grey", Intensity::Polar(PolarZone::Grey))]
#[case("400 blue", Intensity::Polar(PolarZone::Blue))]
#[case("400 green", Intensity::Polar(PolarZone::Green))]
#[case("400 orange", Intensity::Polar(PolarZone::Orange))]
#[case("400 red", Intensity::Polar(PolarZone::Red))]
fn polar_intensities(#[case] text: &str, #[case] expected: Intensity) {
    assert_eq!(classify_intensity(text, IntensitySystem::Polar), Some(expected));
}

#[rstest]
#[case("400 yellow", Intensity::International(InternationalZone::Yellow))]
#[case("400 white", Intensity::International(InternationalZone::White))]
#[case("400 pink", Intensity::International(InternationalZone::Pink))]
#[case("400 red", Intensity::International(InternationalZone::Red))]
#[case("400 blue", Intensity::International(InternationalZone::Blue))]
#[case("400 brown", Intensity::International(InternationalZone::Brown))]
#[case("400 purple", Intensity::International(InternationalZone::Purple))]
// Red outranks blue in the international table.
#[case("200 blue 200 red", Intensity::International(InternationalZone::Red))]
fn international_intensities(#[case] text: &str, #[case] expected: Intensity) {
    assert_eq!(classify_intensity(text, IntensitySystem::International), Some(expected));
}

#[test]
fn colour_vocabulary_follows_active_system() {
    assert_eq!(classify_intensity("400 grey", IntensitySystem::International), None);
    assert_eq!(classify_intensity("400 yellow", IntensitySystem::Polar), None);
    assert_eq!(
        classify_intensity("200 blue 200 red", IntensitySystem::Polar),
        Some(Intensity::Polar(PolarZone::Blue))
    );
}

#[test]
fn heart_rates_outrank_words() {
    assert_eq!(classify_intensity("400 easy hr160", IntensitySystem::Polar), Some(Intensity::HeartRate(160)));
    assert_eq!(classify_intensity("400 red hr25", IntensitySystem::Polar), Some(Intensity::HeartRateBy10(25)));
}

#[test]
fn rejected_exact_heart_rate_falls_back_to_first_two_digits() {
    assert_eq!(classify_intensity("hr250", IntensitySystem::Polar), Some(Intensity::HeartRateBy10(25)));
    assert_eq!(classify_intensity("hr163 easy", IntensitySystem::Polar), Some(Intensity::Standard(Effort::Easy)));
    assert_eq!(classify_intensity("hr31", IntensitySystem::Polar), None);
}

#[test]
fn no_annotation_means_no_intensity() {
    assert_eq!(classify_intensity("400 free", IntensitySystem::Polar), None);
    assert_eq!(classify_intensity("", IntensitySystem::International), None);
}
