//! Client rollup maintenance.
//!
//! `total_tests`, `latest_score`, and `last_test_date` are denormalized
//! onto the client record. The scoring engine never writes them; the
//! store recomputes them whenever a test record is created or deleted.

use aws_sdk_s3::Client as S3Client;
use uuid::Uuid;

use fmstrack_core::models::client::Client;
use fmstrack_core::models::test_record::TestRecord;

use crate::error::StorageError;
use crate::records;

/// Fold a newly created record into a client's rollups.
pub fn apply_new_test(client: &mut Client, record: &TestRecord) {
    client.total_tests += 1;
    client.latest_score = Some(record.total_score);
    client.last_test_date = Some(record.test_date);
}

/// Recompute rollups from the full set of surviving records.
pub fn recompute(client: &mut Client, records: &[TestRecord]) {
    match records.iter().max_by_key(|r| r.test_date) {
        Some(latest) => {
            client.total_tests = records.len() as u32;
            client.latest_score = Some(latest.total_score);
            client.last_test_date = Some(latest.test_date);
        }
        None => {
            client.total_tests = 0;
            client.latest_score = None;
            client.last_test_date = None;
        }
    }
}

/// Update the owning client after a record write. A missing client is
/// logged and skipped; the record itself is already durable.
pub async fn record_created(
    s3: &S3Client,
    bucket: &str,
    record: &TestRecord,
) -> Result<(), StorageError> {
    let mut client = match records::load_client(s3, bucket, record.client_id).await {
        Ok(client) => client,
        Err(StorageError::NotFound { .. }) => {
            tracing::warn!(client_id = %record.client_id, "rollup skipped: client not found");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    apply_new_test(&mut client, record);
    records::save_client(s3, bucket, &client).await
}

/// Rebuild the owning client's rollups after a record delete.
pub async fn refresh_after_delete(
    s3: &S3Client,
    bucket: &str,
    client_id: Uuid,
) -> Result<(), StorageError> {
    let mut client = match records::load_client(s3, bucket, client_id).await {
        Ok(client) => client,
        Err(StorageError::NotFound { .. }) => {
            tracing::warn!(client_id = %client_id, "rollup skipped: client not found");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    let remaining = records::list_test_records_for_client(s3, bucket, client_id).await?;
    recompute(&mut client, &remaining);
    records::save_client(s3, bucket, &client).await
}
