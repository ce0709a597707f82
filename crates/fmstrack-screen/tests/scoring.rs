use fmstrack_core::models::test_record::{ExerciseScore, ScoreMap};
use fmstrack_screen::catalog;
use fmstrack_screen::error::ScreenError;
use fmstrack_screen::scoring::{self, RiskLevel, ScoreColor};

fn uniform(score: u8) -> ScoreMap {
    catalog::exercises()
        .iter()
        .map(|ex| {
            (
                ex.id.clone(),
                ExerciseScore {
                    score,
                    pain: false,
                    notes: None,
                },
            )
        })
        .collect()
}

#[test]
fn perfect_screen_totals_twenty_one() {
    let scores = uniform(3);
    assert_eq!(scoring::total_score(&scores), 21);
    assert_eq!(scoring::pain_count(&scores), 0);
    assert!((scoring::average_score(&scores) - 3.0).abs() < f64::EPSILON);
}

#[test]
fn one_painful_exercise_among_six_twos() {
    let mut scores = uniform(2);
    scores.insert(
        "inLineLunge".to_string(),
        ExerciseScore {
            score: 0,
            pain: true,
            notes: None,
        },
    );

    assert_eq!(scoring::total_score(&scores), 12);
    assert_eq!(scoring::pain_count(&scores), 1);
    assert_eq!(scoring::interpret(12).level, RiskLevel::NeedsAttention);
}

#[test]
fn interpretation_thresholds_are_exact() {
    assert_eq!(scoring::interpret(21).level, RiskLevel::Good);
    assert_eq!(scoring::interpret(17).level, RiskLevel::Good);
    assert_eq!(scoring::interpret(16).level, RiskLevel::Moderate);
    assert_eq!(scoring::interpret(14).level, RiskLevel::Moderate);
    assert_eq!(scoring::interpret(13).level, RiskLevel::NeedsAttention);
    assert_eq!(scoring::interpret(0).level, RiskLevel::NeedsAttention);
}

#[test]
fn risk_level_display_strings() {
    assert_eq!(RiskLevel::Good.to_string(), "Good");
    assert_eq!(RiskLevel::Moderate.to_string(), "Moderate");
    assert_eq!(RiskLevel::NeedsAttention.to_string(), "Needs Attention");
}

#[test]
fn interpretation_serializes_the_display_level() {
    let json = serde_json::to_value(scoring::interpret(21)).unwrap();
    assert_eq!(json["level"], "Good");

    let json = serde_json::to_value(scoring::interpret(10)).unwrap();
    assert_eq!(json["level"], "Needs Attention");
}

#[test]
fn average_uses_the_fixed_seven_exercise_denominator() {
    let mut scores = ScoreMap::new();
    scores.insert(
        "deepSquat".to_string(),
        ExerciseScore {
            score: 3,
            pain: false,
            notes: None,
        },
    );
    // three points over seven exercises, not over one entry
    assert!((scoring::average_score(&scores) - 3.0 / 7.0).abs() < f64::EPSILON);
}

#[test]
fn score_colors_track_the_rubric() {
    assert_eq!(scoring::score_color(0), ScoreColor::Red);
    assert_eq!(scoring::score_color(1), ScoreColor::Orange);
    assert_eq!(scoring::score_color(2), ScoreColor::Yellow);
    assert_eq!(scoring::score_color(3), ScoreColor::Green);
}

#[test]
fn complete_submission_passes_validation() {
    scoring::validate_submission(&uniform(2)).unwrap();
}

#[test]
fn submission_missing_an_exercise_is_incomplete() {
    let mut scores = uniform(2);
    scores.remove("hurdleStep");

    let err = scoring::validate_submission(&scores).unwrap_err();
    match err {
        ScreenError::IncompleteAssessment { missing } => {
            assert_eq!(missing, vec!["hurdleStep".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn submission_with_an_unknown_exercise_is_rejected() {
    let mut scores = uniform(2);
    scores.insert(
        "sitAndReach".to_string(),
        ExerciseScore {
            score: 1,
            pain: false,
            notes: None,
        },
    );
    let err = scoring::validate_submission(&scores).unwrap_err();
    assert!(matches!(err, ScreenError::UnknownExercise(_)));
}

#[test]
fn submission_with_an_out_of_range_score_is_rejected() {
    let mut scores = uniform(2);
    scores.insert(
        "deepSquat".to_string(),
        ExerciseScore {
            score: 4,
            pain: false,
            notes: None,
        },
    );
    let err = scoring::validate_submission(&scores).unwrap_err();
    assert!(matches!(err, ScreenError::InvalidScore { value: 4 }));
}

#[test]
fn submission_violating_the_pain_clamp_is_rejected() {
    let mut scores = uniform(2);
    scores.insert(
        "deepSquat".to_string(),
        ExerciseScore {
            score: 2,
            pain: true,
            notes: None,
        },
    );
    let err = scoring::validate_submission(&scores).unwrap_err();
    assert!(matches!(err, ScreenError::PainScoreMismatch { .. }));
}
