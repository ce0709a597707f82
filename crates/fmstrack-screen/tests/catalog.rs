use fmstrack_screen::catalog::{self, EXERCISE_COUNT, MAX_TOTAL_SCORE};

#[test]
fn catalog_has_exactly_seven_exercises() {
    assert_eq!(catalog::exercises().len(), EXERCISE_COUNT);
}

#[test]
fn exercise_order_is_stable() {
    let ids: Vec<&str> = catalog::exercises()
        .iter()
        .map(|ex| ex.id.as_str())
        .collect();
    assert_eq!(
        ids,
        [
            "deepSquat",
            "hurdleStep",
            "inLineLunge",
            "shoulderMobility",
            "activeStraightLeg",
            "trunkStabilityPushup",
            "rotaryStability",
        ]
    );
}

#[test]
fn every_rubric_covers_scores_zero_through_three() {
    for ex in catalog::exercises() {
        let keys: Vec<u8> = ex.scoring_criteria.keys().copied().collect();
        assert_eq!(keys, [0, 1, 2, 3], "bad rubric keys for {}", ex.id);
        for text in ex.scoring_criteria.values() {
            assert!(!text.is_empty());
        }
    }
}

#[test]
fn get_exercise_finds_known_ids() {
    let ex = catalog::get_exercise("deepSquat").unwrap();
    assert_eq!(ex.name, "Deep Squat");
}

#[test]
fn get_exercise_returns_none_for_unknown_id() {
    assert!(catalog::get_exercise("sitAndReach").is_none());
}

#[test]
fn max_total_matches_catalog_size() {
    assert_eq!(MAX_TOTAL_SCORE as usize, EXERCISE_COUNT * 3);
}
