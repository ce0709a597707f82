use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("invalid score {value}: must be between 0 and 3")]
    InvalidScore { value: u8 },

    #[error("exercise '{exercise_id}' must be scored before advancing")]
    ScoreRequired { exercise_id: String },

    #[error("assessment incomplete: missing scores for {}", missing.join(", "))]
    IncompleteAssessment { missing: Vec<String> },

    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("exercise '{exercise_id}' reports pain but has score {score}")]
    PainScoreMismatch { exercise_id: String, score: u8 },
}
