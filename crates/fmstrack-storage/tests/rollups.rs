use std::collections::BTreeMap;

use uuid::Uuid;

use fmstrack_core::models::client::Client;
use fmstrack_core::models::test_record::{ExerciseScore, TestRecord};
use fmstrack_storage::rollups;

fn client() -> Client {
    Client {
        id: Uuid::new_v4(),
        name: "Jordan Blake".to_string(),
        email: "jordan@example.com".to_string(),
        phone: None,
        date_of_birth: None,
        occupation: None,
        created_at: "2026-01-01T00:00:00Z".parse().unwrap(),
        total_tests: 0,
        latest_score: None,
        last_test_date: None,
    }
}

fn record(client: &Client, total_score: u8, test_date: &str) -> TestRecord {
    TestRecord {
        id: Uuid::new_v4(),
        client_id: client.id,
        test_date: test_date.parse().unwrap(),
        scores: BTreeMap::from([(
            "deepSquat".to_string(),
            ExerciseScore {
                score: 2,
                pain: false,
                notes: None,
            },
        )]),
        total_score,
        assessor_notes: None,
    }
}

#[test]
fn a_new_test_increments_the_rollups() {
    let mut c = client();
    let r = record(&c, 18, "2026-02-10T09:30:00Z");

    rollups::apply_new_test(&mut c, &r);

    assert_eq!(c.total_tests, 1);
    assert_eq!(c.latest_score, Some(18));
    assert_eq!(c.last_test_date, Some(r.test_date));
}

#[test]
fn successive_tests_keep_counting() {
    let mut c = client();
    let first = record(&c, 12, "2026-02-10T09:30:00Z");
    let second = record(&c, 15, "2026-03-10T09:30:00Z");

    rollups::apply_new_test(&mut c, &first);
    rollups::apply_new_test(&mut c, &second);

    assert_eq!(c.total_tests, 2);
    assert_eq!(c.latest_score, Some(15));
    assert_eq!(c.last_test_date, Some(second.test_date));
}

#[test]
fn recompute_with_no_records_resets_the_rollups() {
    let mut c = client();
    let r = record(&c, 18, "2026-02-10T09:30:00Z");
    rollups::apply_new_test(&mut c, &r);

    rollups::recompute(&mut c, &[]);

    assert_eq!(c.total_tests, 0);
    assert_eq!(c.latest_score, None);
    assert_eq!(c.last_test_date, None);
}

#[test]
fn recompute_picks_the_most_recent_surviving_record() {
    let mut c = client();
    let older = record(&c, 20, "2026-01-15T08:00:00Z");
    let newer = record(&c, 11, "2026-02-20T08:00:00Z");

    // insertion order must not matter
    rollups::recompute(&mut c, &[newer.clone(), older.clone()]);
    assert_eq!(c.total_tests, 2);
    assert_eq!(c.latest_score, Some(11));
    assert_eq!(c.last_test_date, Some(newer.test_date));

    rollups::recompute(&mut c, &[older.clone()]);
    assert_eq!(c.total_tests, 1);
    assert_eq!(c.latest_score, Some(20));
    assert_eq!(c.last_test_date, Some(older.test_date));
}
