use crate::{Diagnostic, IntensitySystem, Options, ParseError, Stroke, WorkoutSummary, parse, parse_verbose_with};
use proptest::prelude::*;

fn polar(text: &str) -> WorkoutSummary {
    parse(text, IntensitySystem::Polar).unwrap()
}

fn international(text: &str) -> WorkoutSummary {
    parse(text, IntensitySystem::International).unwrap()
}

fn assert_sum_invariant(summary: &WorkoutSummary) {
    assert_eq!(summary.total_distance, summary.stroke_distances.sum());
    assert!(summary.intensity_distances.sum() <= summary.total_distance);
}

#[test]
fn bare_number_defaults_to_freestyle() {
    let summary = polar("400");
    assert_eq!(summary.total_distance, 400);
    assert_eq!(summary.stroke_distances.get(Stroke::Freestyle), 400);
    assert!(summary.intensity_distances.is_empty());
}

#[test]
fn inline_repeat_times_distance() {
    let summary = polar("4x100 back");
    assert_eq!(summary.total_distance, 400);
    assert_eq!(summary.stroke_distances.get(Stroke::Backstroke), 400);
}

#[test]
fn standalone_repeat_scales_following_group() {
    let summary = polar("4x\n(100 fly + 100 free)");
    assert_eq!(summary.total_distance, 800);
    assert_eq!(summary.stroke_distances.get(Stroke::Butterfly), 400);
    assert_eq!(summary.stroke_distances.get(Stroke::Freestyle), 400);
}

#[test]
fn inline_repeat_group_matches_standalone_form() {
    assert_eq!(polar("4x (100 fly + 100 free)"), polar("4x\n(100 fly + 100 free)"));
}

#[test]
fn exact_heart_rate_label() {
    let summary = polar("300 free hr165");
    assert_eq!(summary.intensity_distances.get("HR 165"), Some(300));
    assert_eq!(summary.intensity_distances.len(), 1);
}

#[test]
fn colour_words_follow_the_active_system() {
    let summary = international("400 grey\n200 yellow");
    assert_eq!(summary.total_distance, 600);
    assert_eq!(summary.intensity_distances.get("Grey"), None);
    assert_eq!(summary.intensity_distances.get("Yellow"), Some(200));

    let summary = polar("400 grey\n200 yellow");
    assert_eq!(summary.intensity_distances.get("Grey"), Some(400));
    assert_eq!(summary.intensity_distances.get("Yellow"), None);
}

#[test]
fn lines_without_distance_create_no_intensity_keys() {
    let summary = polar("easy swim\nfast finish\n200 moderate");
    assert_eq!(summary.intensity_distances.labels().collect::<Vec<_>>(), vec!["Moderate"]);
    assert_eq!(summary.total_distance, 200);
}

#[test]
fn unbalanced_group_at_end_contributes_nothing() {
    let summary = polar("400 free\n3x(200 free");
    assert_eq!(summary.total_distance, 400);
    assert_eq!(polar("3x(200 free"), WorkoutSummary::new());
}

#[test]
fn parsing_is_repeatable() {
    let text = "400 free easy\n4x\n[100 fly hr170\n100 back]\n8x50 kick hr27";
    assert_eq!(polar(text), polar(text));
    assert_eq!(international(text), international(text));
}

#[test]
fn full_example_workout() {
    let text = "Warm up:\n400 free\n4x100 back\n4x50 choice\n\nMain Set:\n4x (100 fly + 100 free)\n2x[100 breast]";
    let summary = polar(text);

    assert_eq!(summary.total_distance, 400 + 400 + 200 + 800 + 200);
    assert_eq!(summary.stroke_distances.get(Stroke::Freestyle), 800);
    assert_eq!(summary.stroke_distances.get(Stroke::Backstroke), 400);
    assert_eq!(summary.stroke_distances.get(Stroke::Choice), 200);
    assert_eq!(summary.stroke_distances.get(Stroke::Butterfly), 400);
    assert_eq!(summary.stroke_distances.get(Stroke::Breaststroke), 200);
    assert_eq!(summary.stroke_distances.get(Stroke::Im), 0);
    assert_sum_invariant(&summary);
}

#[test]
fn intensity_labels_keep_first_seen_order() {
    let summary = polar("200 red\n100 easy\n300 hr150\n50 red");
    assert_eq!(summary.intensity_distances.iter().collect::<Vec<_>>(), vec![
        ("Red", 250),
        ("Easy", 100),
        ("HR 150", 300)
    ]);
}

#[test]
fn repeat_is_used_up_by_a_heading_line() {
    // The heading consumes the repeat even though it has no distance.
    let summary = polar("3x\nMain set\n100 free");
    assert_eq!(summary.total_distance, 100);
}

#[test]
fn multi_line_group_with_inherited_intensity() {
    let summary = polar("2x [\n100 fly\n100 back\n] hr160");
    assert_eq!(summary.total_distance, 400);
    assert_eq!(summary.stroke_distances.get(Stroke::Butterfly), 200);
    assert_eq!(summary.stroke_distances.get(Stroke::Backstroke), 200);
    assert_eq!(summary.intensity_distances.get("HR 160"), Some(400));
}

#[test]
fn group_intensity_comes_from_the_whole_group() {
    let summary = polar("(100 easy + 100 fast)");
    assert_eq!(summary.intensity_distances.iter().collect::<Vec<_>>(), vec![("Easy", 200)]);

    let summary = polar("3x\n[100 fly red\n100 back]");
    assert_eq!(summary.intensity_distances.iter().collect::<Vec<_>>(), vec![("Red", 600)]);
    assert_eq!(summary.stroke_distances.get(Stroke::Butterfly), 300);
}

#[test]
fn oversized_number_is_skipped_and_reported() {
    let text = "400 free\n12345678901234567890123 back";
    let res = parse_verbose_with(text, &Options::default()).unwrap();
    assert_eq!(res.summary.total_distance, 400);
    assert_eq!(res.summary.stroke_distances.get(Stroke::Backstroke), 0);
    assert_eq!(res.details.diagnostics, vec![Diagnostic::NumberTooLarge {
        line: 2,
        digits: "12345678901234567890123".to_string()
    }]);
}

#[test]
fn heading_that_uses_up_a_repeat_is_reported() {
    let res = parse_verbose_with("3x\nMain set\n100 free\n2x(50 fly", &Options::default()).unwrap();
    assert_eq!(res.summary.total_distance, 100);
    assert_eq!(res.details.diagnostics, vec![
        Diagnostic::UnusedRepeat { line: 1, count: 3 },
        Diagnostic::UnterminatedGroup { start_line: 4, depth: 1 },
    ]);
}

#[test]
fn overflowing_repeat_is_reported_with_its_line() {
    let err = parse("400 free\n18446744073709551615x\n2x100", IntensitySystem::Polar).unwrap_err();
    assert_eq!(err, ParseError::DistanceOverflow { line: 3 });
    assert!(err.to_string().starts_with("line 3:"));
}

fn workout_line() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "free", "fr", "back", "bk", "breast", "fly", "im", "choice", "drill", "kick", "scull", "easy", "moderate",
        "strong", "fast", "grey", "blue", "green", "orange", "red", "yellow", "white", "pink", "brown", "purple",
        "hr150", "hr165", "hr27", "hr250", "swim", "warm", "up:",
    ]);
    prop_oneof![
        (1u64..1000, word.clone()).prop_map(|(d, w)| format!("{d} {w}")),
        (1u64..20, 1u64..500, word.clone()).prop_map(|(r, d, w)| format!("{r}x{d} {w}")),
        (1u64..10).prop_map(|r| format!("{r}x")),
        (1u64..10, 1u64..500, word.clone(), 1u64..500, word.clone())
            .prop_map(|(r, a, w1, b, w2)| format!("{r}x ({a} {w1} + {b} {w2})")),
        (1u64..500, word.clone()).prop_map(|(d, w)| format!("[{d} {w}")),
        (1u64..500, word.clone()).prop_map(|(d, w)| format!("{d} {w}]")),
        word.prop_map(str::to_string),
        Just(String::new()),
    ]
}

proptest! {
    #[test]
    fn generated_workouts_keep_totals_consistent(
        lines in prop::collection::vec(workout_line(), 0..40),
        international_zones in any::<bool>(),
    ) {
        let system = if international_zones { IntensitySystem::International } else { IntensitySystem::Polar };
        let text = lines.join("\n");
        let first = parse(&text, system).unwrap();
        let second = parse(&text, system).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.total_distance, first.stroke_distances.sum());
        prop_assert!(first.intensity_distances.sum() <= first.total_distance);
        prop_assert!(first.intensity_distances.iter().all(|(_, distance)| distance > 0));
    }

    #[test]
    fn arbitrary_text_never_panics(text in "[0-9a-z x×*+()\\[\\]{}\n]{0,200}") {
        if let Ok(summary) = parse(&text, IntensitySystem::Polar) {
            prop_assert_eq!(summary.total_distance, summary.stroke_distances.sum());
            prop_assert!(summary.intensity_distances.sum() <= summary.total_distance);
        }
    }
}
