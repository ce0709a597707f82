//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the tracker bucket.

use uuid::Uuid;

pub fn client(id: Uuid) -> String {
    format!("clients/{id}.json")
}

pub const CLIENTS_PREFIX: &str = "clients/";

pub fn test_record(id: Uuid) -> String {
    format!("tests/{id}.json")
}

pub const TESTS_PREFIX: &str = "tests/";
