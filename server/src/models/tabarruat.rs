use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted tabarruat pledge. Rows are written once and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub requester_name: String,
    pub organization: String,
    pub deceased_names: Json<Vec<String>>,
    pub already_contributed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields of a pledge, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub requester_name: String,
    pub organization: String,
    pub deceased_names: Vec<String>,
    pub already_contributed: bool,
}

/// Payload echoed on the success page. `already_contributed` is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub requester_name: String,
    pub organization: String,
    pub deceased_names: Vec<String>,
}

impl From<&NewSubmission> for Confirmation {
    fn from(submission: &NewSubmission) -> Self {
        Self {
            requester_name: submission.requester_name.clone(),
            organization: submission.organization.clone(),
            deceased_names: submission.deceased_names.clone(),
        }
    }
}
