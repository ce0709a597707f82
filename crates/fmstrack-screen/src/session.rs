use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use fmstrack_core::models::test_record::{ScoreMap, TestRecordCreate};

use crate::catalog::{self, EXERCISE_COUNT, ExerciseDefinition};
use crate::entry::ScoreEntry;
use crate::error::ScreenError;

/// Partial update for one entry; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntryUpdate {
    pub score: Option<u8>,
    pub pain: Option<bool>,
    pub notes: Option<String>,
}

/// The in-progress state of one screen for one client.
///
/// Owns one entry per catalog exercise plus a cursor into the fixed
/// exercise sequence. Forward navigation is gated on the current exercise
/// being scored; backward navigation is free. The session never submits
/// itself: callers check [`is_complete`](Self::is_complete) and call
/// [`finalize`](Self::finalize).
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    client_id: Uuid,
    current: usize,
    entries: BTreeMap<String, ScoreEntry>,
}

impl AssessmentSession {
    /// Start a screen for a client, seeded with all seven catalog
    /// exercises unscored.
    pub fn new(client_id: Uuid) -> Self {
        let entries = catalog::exercises()
            .iter()
            .map(|ex| (ex.id.clone(), ScoreEntry::new(ex.id.clone())))
            .collect();
        Self {
            client_id,
            current: 0,
            entries,
        }
    }

    pub fn client_id(&self) -> Uuid {
        self.client_id
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_exercise(&self) -> &'static ExerciseDefinition {
        &catalog::exercises()[self.current]
    }

    pub fn entry(&self, exercise_id: &str) -> Option<&ScoreEntry> {
        self.entries.get(exercise_id)
    }

    /// Merge a partial update into the entry for any exercise, not just
    /// the current step. The score range is checked before
    /// any field is touched, and pain is applied before score so a
    /// combined update observes the pain clamp.
    pub fn update_entry(
        &mut self,
        exercise_id: &str,
        update: EntryUpdate,
    ) -> Result<(), ScreenError> {
        if let Some(value) = update.score
            && value > catalog::MAX_EXERCISE_SCORE
        {
            return Err(ScreenError::InvalidScore { value });
        }
        let entry = self
            .entries
            .get_mut(exercise_id)
            .ok_or_else(|| ScreenError::UnknownExercise(exercise_id.to_string()))?;
        if let Some(pain) = update.pain {
            entry.set_pain(pain);
        }
        if let Some(value) = update.score {
            entry.set_score(value)?;
        }
        if let Some(notes) = update.notes {
            entry.set_notes(notes);
        }
        Ok(())
    }

    /// Move to the next exercise. Requires the current one to be scored;
    /// saturates at the last exercise.
    pub fn advance(&mut self) -> Result<(), ScreenError> {
        let exercise_id = &catalog::exercises()[self.current].id;
        let scored = self
            .entries
            .get(exercise_id)
            .is_some_and(|e| e.is_scored());
        if !scored {
            return Err(ScreenError::ScoreRequired {
                exercise_id: exercise_id.clone(),
            });
        }
        if self.current + 1 < EXERCISE_COUNT {
            self.current += 1;
        }
        Ok(())
    }

    /// Move back one exercise; free navigation, saturating at the first.
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// True once every exercise has a score. A pain-forced 0 counts.
    pub fn is_complete(&self) -> bool {
        catalog::exercises()
            .iter()
            .all(|ex| self.entries.get(&ex.id).is_some_and(|e| e.is_scored()))
    }

    /// Running total of the scores entered so far; unscored exercises
    /// contribute 0. Display-only; the persisted total comes from the
    /// finalized record.
    pub fn current_total(&self) -> u8 {
        self.entries.values().filter_map(|e| e.score).sum()
    }

    /// Build the write request for this screen. Fails while any exercise
    /// is unscored, naming the missing ones; the session itself stays
    /// usable so the assessor can fill the gaps and retry.
    pub fn finalize(
        &self,
        assessor_notes: Option<String>,
    ) -> Result<TestRecordCreate, ScreenError> {
        let missing: Vec<String> = catalog::exercises()
            .iter()
            .filter(|ex| !self.entries.get(&ex.id).is_some_and(|e| e.is_scored()))
            .map(|ex| ex.id.clone())
            .collect();
        if !missing.is_empty() {
            return Err(ScreenError::IncompleteAssessment { missing });
        }

        let scores: ScoreMap = self
            .entries
            .values()
            .filter_map(|entry| entry.freeze().map(|s| (entry.exercise_id.clone(), s)))
            .collect();

        Ok(TestRecordCreate {
            client_id: self.client_id,
            scores,
            assessor_notes,
        })
    }
}
