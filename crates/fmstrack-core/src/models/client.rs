use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// A tracked client, including the denormalized test rollups maintained by
/// the record store (`total_tests`, `latest_score`, `last_test_date`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub occupation: Option<String>,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub total_tests: u32,
    pub latest_score: Option<u8>,
    pub last_test_date: Option<jiff::Timestamp>,
}

impl Client {
    /// Materialize a new client from a create request. The server assigns
    /// the id and creation time; rollups start zeroed.
    pub fn new(create: ClientCreate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: create.name,
            email: create.email,
            phone: create.phone,
            date_of_birth: create.date_of_birth,
            occupation: create.occupation,
            created_at: jiff::Timestamp::now(),
            total_tests: 0,
            latest_score: None,
            last_test_date: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct ClientCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub occupation: Option<String>,
}

/// Partial update. Rollup fields are not client-writable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct ClientUpdate {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub occupation: Option<String>,
}

impl ClientUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.date_of_birth.is_none()
            && self.occupation.is_none()
    }

    /// Merge the provided fields into an existing client.
    pub fn apply_to(self, client: &mut Client) {
        if let Some(name) = self.name {
            client.name = name;
        }
        if let Some(email) = self.email {
            client.email = email;
        }
        if let Some(phone) = self.phone {
            client.phone = Some(phone);
        }
        if let Some(dob) = self.date_of_birth {
            client.date_of_birth = Some(dob);
        }
        if let Some(occupation) = self.occupation {
            client.occupation = Some(occupation);
        }
    }
}
