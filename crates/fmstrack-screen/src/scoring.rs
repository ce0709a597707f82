//! Pure scoring and interpretation over a finalized score map.
//!
//! Stateless: these run once at submission and again whenever a stored
//! record is rendered.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use fmstrack_core::models::test_record::ScoreMap;

use crate::catalog::{self, EXERCISE_COUNT, MAX_EXERCISE_SCORE};
use crate::error::ScreenError;

/// Sum of all entry scores. 0..=21 for a valid screen.
pub fn total_score(scores: &ScoreMap) -> u8 {
    scores.values().map(|s| s.score).sum()
}

/// Number of exercises where pain was reported.
pub fn pain_count(scores: &ScoreMap) -> usize {
    scores.values().filter(|s| s.pain).count()
}

/// Average per exercise over the fixed seven-exercise denominator, even
/// when called on a partial map.
pub fn average_score(scores: &ScoreMap) -> f64 {
    f64::from(total_score(scores)) / EXERCISE_COUNT as f64
}

/// Risk banding for a 0-21 total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskLevel {
    Good,
    Moderate,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Good => "Good",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::NeedsAttention => "Needs Attention",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub level: RiskLevel,
    pub description: String,
}

/// Standard movement-screen risk banding: 17+ Good, 14-16 Moderate,
/// below 14 Needs Attention.
pub fn interpret(total: u8) -> Interpretation {
    let (level, description) = if total >= 17 {
        (RiskLevel::Good, "Low risk of injury, good movement quality")
    } else if total >= 14 {
        (RiskLevel::Moderate, "Moderate risk, some movement limitations")
    } else {
        (
            RiskLevel::NeedsAttention,
            "Higher risk of injury, significant movement limitations",
        )
    };
    Interpretation {
        level,
        description: description.to_string(),
    }
}

/// Display tier for a single 0-3 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreColor {
    Red,
    Orange,
    Yellow,
    Green,
}

pub fn score_color(score: u8) -> ScoreColor {
    match score {
        0 => ScoreColor::Red,
        1 => ScoreColor::Orange,
        2 => ScoreColor::Yellow,
        _ => ScoreColor::Green,
    }
}

/// Gate run before a record write: every catalog exercise present and
/// scored in range, no ids outside the catalog, and the pain-forces-zero
/// rule intact.
pub fn validate_submission(scores: &ScoreMap) -> Result<(), ScreenError> {
    for (exercise_id, entry) in scores {
        if catalog::get_exercise(exercise_id).is_none() {
            return Err(ScreenError::UnknownExercise(exercise_id.clone()));
        }
        if entry.score > MAX_EXERCISE_SCORE {
            return Err(ScreenError::InvalidScore { value: entry.score });
        }
        if entry.pain && entry.score != 0 {
            return Err(ScreenError::PainScoreMismatch {
                exercise_id: exercise_id.clone(),
                score: entry.score,
            });
        }
    }

    let missing: Vec<String> = catalog::exercises()
        .iter()
        .filter(|ex| !scores.contains_key(&ex.id))
        .map(|ex| ex.id.clone())
        .collect();
    if !missing.is_empty() {
        return Err(ScreenError::IncompleteAssessment { missing });
    }

    Ok(())
}
