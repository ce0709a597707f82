use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A single exercise's finalized result within one test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseScore {
    pub score: u8,
    #[serde(default)]
    pub pain: bool,
    pub notes: Option<String>,
}

/// Finalized scores keyed by exercise id.
pub type ScoreMap = BTreeMap<String, ExerciseScore>;

/// The immutable, persisted outcome of one completed screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub test_date: jiff::Timestamp,
    pub scores: ScoreMap,
    pub total_score: u8,
    pub assessor_notes: Option<String>,
}

/// Write-request shape: the store never receives `id`, `test_date`, or
/// `total_score` from the caller; those are assigned at creation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestRecordCreate {
    pub client_id: Uuid,
    pub scores: ScoreMap,
    pub assessor_notes: Option<String>,
}
