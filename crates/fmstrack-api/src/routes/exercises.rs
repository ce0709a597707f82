use axum::Json;
use axum::extract::Path;

use fmstrack_screen::catalog::{self, ExerciseDefinition};

use crate::error::ApiError;

pub async fn list_exercises() -> Json<Vec<ExerciseDefinition>> {
    Json(catalog::exercises().to_vec())
}

pub async fn get_exercise(
    Path(id): Path<String>,
) -> Result<Json<ExerciseDefinition>, ApiError> {
    let exercise = catalog::get_exercise(&id)
        .ok_or_else(|| ApiError::NotFound(format!("exercise not found: {id}")))?;
    Ok(Json(exercise.clone()))
}
