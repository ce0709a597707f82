use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use fmstrack_core::models::test_record::{TestRecord, TestRecordCreate};
use fmstrack_screen::scoring;
use fmstrack_storage::{records, rollups};

use crate::error::ApiError;
use crate::state::AppState;

/// Finalize a completed screen into a durable record.
///
/// The submission is validated and the total computed here, before any
/// store call; the store only assigns bytes.
pub async fn create_test_record(
    State(state): State<AppState>,
    Json(create): Json<TestRecordCreate>,
) -> Result<Json<TestRecord>, ApiError> {
    scoring::validate_submission(&create.scores)?;
    let total_score = scoring::total_score(&create.scores);

    let record = TestRecord {
        id: Uuid::new_v4(),
        client_id: create.client_id,
        test_date: jiff::Timestamp::now(),
        scores: create.scores,
        total_score,
        assessor_notes: create.assessor_notes,
    };

    records::save_test_record(&state.s3, &state.bucket, &record).await?;
    rollups::record_created(&state.s3, &state.bucket, &record).await?;

    tracing::info!(
        record_id = %record.id,
        client_id = %record.client_id,
        total_score = total_score,
        "created test record"
    );
    Ok(Json(record))
}

pub async fn get_test_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TestRecord>, ApiError> {
    let record = records::load_test_record(&state.s3, &state.bucket, id).await?;
    Ok(Json(record))
}

pub async fn list_client_test_records(
    State(state): State<AppState>,
    Path(client_id): Path<Uuid>,
) -> Result<Json<Vec<TestRecord>>, ApiError> {
    let list =
        records::list_test_records_for_client(&state.s3, &state.bucket, client_id).await?;
    Ok(Json(list))
}

pub async fn delete_test_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let record = records::load_test_record(&state.s3, &state.bucket, id).await?;
    records::delete_test_record(&state.s3, &state.bucket, id).await?;
    rollups::refresh_after_delete(&state.s3, &state.bucket, record.client_id).await?;
    tracing::info!(record_id = %id, "deleted test record");
    Ok(Json(()))
}
