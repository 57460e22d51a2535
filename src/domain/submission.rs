use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::submitter_email::SubmitterEmail;
use crate::domain::submitter_name::SubmitterName;
use crate::domain::submitter_phone::SubmitterPhone;

/// One persisted contact-form record. Insert-only: there are no update
/// or delete operations anywhere in the application.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub phone: SubmitterPhone,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
