use fmstrack_screen::entry::ScoreEntry;
use fmstrack_screen::error::ScreenError;

#[test]
fn set_score_accepts_the_valid_range() {
    let mut entry = ScoreEntry::new("deepSquat");
    for value in 0..=3 {
        entry.set_score(value).unwrap();
        assert_eq!(entry.score, Some(value));
    }
}

#[test]
fn set_score_rejects_out_of_range_values() {
    let mut entry = ScoreEntry::new("deepSquat");
    let err = entry.set_score(4).unwrap_err();
    assert!(matches!(err, ScreenError::InvalidScore { value: 4 }));
    assert!(!entry.is_scored());
}

#[test]
fn pain_forces_score_to_zero() {
    let mut entry = ScoreEntry::new("hurdleStep");
    entry.set_score(3).unwrap();
    entry.set_pain(true);
    assert_eq!(entry.score, Some(0));
}

#[test]
fn nonzero_score_is_ignored_while_pain_is_set() {
    let mut entry = ScoreEntry::new("hurdleStep");
    entry.set_pain(true);
    entry.set_score(2).unwrap();
    assert_eq!(entry.score, Some(0));
    // zero stays settable
    entry.set_score(0).unwrap();
    assert_eq!(entry.score, Some(0));
}

#[test]
fn clearing_pain_does_not_restore_the_score() {
    let mut entry = ScoreEntry::new("inLineLunge");
    entry.set_score(2).unwrap();
    entry.set_pain(true);
    entry.set_pain(false);
    assert_eq!(entry.score, Some(0));

    // score can move again once pain is cleared
    entry.set_score(2).unwrap();
    assert_eq!(entry.score, Some(2));
}

#[test]
fn notes_overwrite_previous_text() {
    let mut entry = ScoreEntry::new("shoulderMobility");
    entry.set_notes("limited reach on left side");
    entry.set_notes("retested, reach normal");
    assert_eq!(entry.notes.as_deref(), Some("retested, reach normal"));
}

#[test]
fn freeze_requires_a_score() {
    let mut entry = ScoreEntry::new("rotaryStability");
    assert!(entry.freeze().is_none());

    entry.set_score(1).unwrap();
    let frozen = entry.freeze().unwrap();
    assert_eq!(frozen.score, 1);
    assert!(!frozen.pain);
}
