use serde::{Deserialize, Serialize};
use ts_rs::TS;

use fmstrack_core::models::test_record::ExerciseScore;

use crate::catalog::MAX_EXERCISE_SCORE;
use crate::error::ScreenError;

/// One exercise's score, pain flag, and notes while the assessment is in
/// progress. `score` stays `None` until the assessor picks a value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub exercise_id: String,
    pub score: Option<u8>,
    pub pain: bool,
    pub notes: Option<String>,
}

impl ScoreEntry {
    pub fn new(exercise_id: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            score: None,
            pain: false,
            notes: None,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }

    /// Set the 0-3 score. While pain is flagged the score is pinned to 0:
    /// a non-zero value is ignored, matching the scoring form where those
    /// options are disabled.
    pub fn set_score(&mut self, value: u8) -> Result<(), ScreenError> {
        if value > MAX_EXERCISE_SCORE {
            return Err(ScreenError::InvalidScore { value });
        }
        if self.pain && value != 0 {
            return Ok(());
        }
        self.score = Some(value);
        Ok(())
    }

    /// Flag or clear pain. Pain forces the score to 0; clearing the flag
    /// leaves the score at 0 rather than restoring an earlier value.
    pub fn set_pain(&mut self, pain: bool) {
        self.pain = pain;
        if pain {
            self.score = Some(0);
        }
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = Some(notes.into());
    }

    /// Freeze into the persisted shape. `None` while unscored.
    pub fn freeze(&self) -> Option<ExerciseScore> {
        self.score.map(|score| ExerciseScore {
            score,
            pain: self.pain,
            notes: self.notes.clone(),
        })
    }
}
