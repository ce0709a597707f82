use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use fmstrack_core::models::client::{Client, ClientCreate, ClientUpdate};
use fmstrack_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = records::list_clients(&state.s3, &state.bucket).await?;
    Ok(Json(clients))
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(create): Json<ClientCreate>,
) -> Result<Json<Client>, ApiError> {
    create.validate()?;
    let client = Client::new(create);
    records::save_client(&state.s3, &state.bucket, &client).await?;
    tracing::info!(client_id = %client.id, "created client");
    Ok(Json(client))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Client>, ApiError> {
    let client = records::load_client(&state.s3, &state.bucket, id).await?;
    Ok(Json(client))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ClientUpdate>,
) -> Result<Json<Client>, ApiError> {
    update.validate()?;
    if update.is_empty() {
        return Err(ApiError::BadRequest("no fields to update".to_string()));
    }

    let mut client = records::load_client(&state.s3, &state.bucket, id).await?;
    update.apply_to(&mut client);
    records::save_client(&state.s3, &state.bucket, &client).await?;
    Ok(Json(client))
}

/// Delete a client and every test record belonging to them.
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    // Missing client is a 404, not a silent no-op.
    records::load_client(&state.s3, &state.bucket, id).await?;

    let deleted =
        records::delete_test_records_for_client(&state.s3, &state.bucket, id).await?;
    records::delete_client(&state.s3, &state.bucket, id).await?;
    tracing::info!(client_id = %id, records_deleted = deleted, "deleted client");
    Ok(Json(()))
}
