//! Typed load/save/list over the JSON object layout in
//! [`fmstrack_core::storage_keys`].

use aws_sdk_s3::Client as S3Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use fmstrack_core::models::client::Client;
use fmstrack_core::models::test_record::TestRecord;
use fmstrack_core::storage_keys;

use crate::error::StorageError;
use crate::objects;

async fn load_json<T: DeserializeOwned>(
    s3: &S3Client,
    bucket: &str,
    key: &str,
) -> Result<T, StorageError> {
    let body = objects::get_object(s3, bucket, key).await?;
    Ok(serde_json::from_slice(&body)?)
}

async fn save_json<T: Serialize>(
    s3: &S3Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(s3, bucket, key, body, Some("application/json")).await
}

pub async fn load_client(
    s3: &S3Client,
    bucket: &str,
    id: Uuid,
) -> Result<Client, StorageError> {
    load_json(s3, bucket, &storage_keys::client(id)).await
}

pub async fn save_client(
    s3: &S3Client,
    bucket: &str,
    client: &Client,
) -> Result<(), StorageError> {
    save_json(s3, bucket, &storage_keys::client(client.id), client).await
}

pub async fn delete_client(
    s3: &S3Client,
    bucket: &str,
    id: Uuid,
) -> Result<(), StorageError> {
    objects::delete_object(s3, bucket, &storage_keys::client(id)).await
}

pub async fn list_clients(s3: &S3Client, bucket: &str) -> Result<Vec<Client>, StorageError> {
    let keys = objects::list_objects(s3, bucket, storage_keys::CLIENTS_PREFIX).await?;

    let mut clients = Vec::with_capacity(keys.len());
    for key in &keys {
        clients.push(load_json(s3, bucket, key).await?);
    }
    Ok(clients)
}

pub async fn load_test_record(
    s3: &S3Client,
    bucket: &str,
    id: Uuid,
) -> Result<TestRecord, StorageError> {
    load_json(s3, bucket, &storage_keys::test_record(id)).await
}

pub async fn save_test_record(
    s3: &S3Client,
    bucket: &str,
    record: &TestRecord,
) -> Result<(), StorageError> {
    save_json(s3, bucket, &storage_keys::test_record(record.id), record).await
}

pub async fn delete_test_record(
    s3: &S3Client,
    bucket: &str,
    id: Uuid,
) -> Result<(), StorageError> {
    objects::delete_object(s3, bucket, &storage_keys::test_record(id)).await
}

pub async fn list_test_records(
    s3: &S3Client,
    bucket: &str,
) -> Result<Vec<TestRecord>, StorageError> {
    let keys = objects::list_objects(s3, bucket, storage_keys::TESTS_PREFIX).await?;

    let mut records = Vec::with_capacity(keys.len());
    for key in &keys {
        records.push(load_json(s3, bucket, key).await?);
    }
    Ok(records)
}

/// All records for one client, most-recent-first.
pub async fn list_test_records_for_client(
    s3: &S3Client,
    bucket: &str,
    client_id: Uuid,
) -> Result<Vec<TestRecord>, StorageError> {
    let mut records: Vec<TestRecord> = list_test_records(s3, bucket)
        .await?
        .into_iter()
        .filter(|r| r.client_id == client_id)
        .collect();
    records.sort_by(|a, b| b.test_date.cmp(&a.test_date));
    Ok(records)
}

/// Delete every record belonging to a client. Returns the number deleted.
pub async fn delete_test_records_for_client(
    s3: &S3Client,
    bucket: &str,
    client_id: Uuid,
) -> Result<usize, StorageError> {
    let records = list_test_records_for_client(s3, bucket, client_id).await?;
    for record in &records {
        delete_test_record(s3, bucket, record.id).await?;
    }
    Ok(records.len())
}
