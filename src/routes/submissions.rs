use actix_web::{web, HttpResponse, ResponseError};
use chrono::Utc;
use reqwest::StatusCode;
use serde::Serialize;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::{
    domain::{
        new_submission::{NewSubmission, NewSubmissionBody},
        submission::Submission,
        submitter_email::SubmitterEmail,
        submitter_name::SubmitterName,
        submitter_phone::SubmitterPhone,
    },
    email_client::EmailClient,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCreatedBody {
    pub message: String,
    pub submission_id: Uuid,
}

#[tracing::instrument(
    name = "Creating a new contact form submission handler",
    skip(body, db_pool, email_client),
    fields(
        submitter_email = ?body.email,
        submitter_name = ?body.name
    )
)]
pub async fn handle_create_submission(
    body: web::Json<NewSubmissionBody>,
    db_pool: web::Data<PgPool>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, IntakeError> {
    // Validation happens before any side effect
    let new_submission: NewSubmission =
        body.try_into().map_err(IntakeError::ValidationError)?;

    let submission = insert_submission(&new_submission, &db_pool)
        .await
        .map_err(IntakeError::PersistenceError)?;

    // Best effort: the record is durably stored at this point, so a mail
    // delivery failure must not turn the response into a 500.
    if let Err(err) = email_client.send_submission_notice(&submission).await {
        tracing::error!(
            "Failed to send a notification email for submission {}: {:?}",
            submission.id,
            err
        );
    }

    Ok(HttpResponse::Ok().json(SubmissionCreatedBody {
        message: String::from("Form submitted successfully"),
        submission_id: submission.id,
    }))
}

#[tracing::instrument(name = "Listing all contact form submissions handler", skip(db_pool))]
pub async fn handle_list_submissions(
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ListError> {
    let submissions = list_submissions(&db_pool)
        .await
        .map_err(ListError::RetrievalError)?;

    Ok(HttpResponse::Ok().json(submissions))
}

#[tracing::instrument(
    name = "Insert a new submission into the database",
    skip(new_submission, db_pool)
)]
async fn insert_submission(
    new_submission: &NewSubmission,
    db_pool: &web::Data<PgPool>,
) -> Result<Submission, sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO contact_submissions (id, name, email, phone, message, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, email, phone, message, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_submission.name.as_ref())
    .bind(new_submission.email.as_ref())
    .bind(new_submission.phone.as_ref())
    .bind(new_submission.message.as_str())
    .bind(Utc::now())
    .map(map_submission_row)
    .fetch_one(db_pool.get_ref())
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })
}

#[tracing::instrument(name = "Fetch all submissions from the database", skip(db_pool))]
async fn list_submissions(db_pool: &web::Data<PgPool>) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query(
        r#"
        SELECT id, name, email, phone, message, created_at
        FROM contact_submissions
        ORDER BY created_at ASC
        "#,
    )
    .map(map_submission_row)
    .fetch_all(db_pool.get_ref())
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })
}

fn map_submission_row(row: PgRow) -> Submission {
    // Stored rows already went through the domain parsers on the way in
    Submission {
        id: row.get("id"),
        name: SubmitterName::parse(row.get("name")).unwrap(),
        email: SubmitterEmail::parse(row.get("email")).unwrap(),
        phone: SubmitterPhone::parse(row.get("phone")).unwrap(),
        message: row.get("message"),
        created_at: row.get("created_at"),
    }
}

#[derive(thiserror::Error)]
pub enum IntakeError {
    #[error("Missing data for any required field")]
    ValidationError(String),
    #[error("Submission failed due to server error")]
    PersistenceError(#[source] sqlx::Error),
}

#[derive(thiserror::Error)]
pub enum ListError {
    #[error("Failed to load submissions due to server error")]
    RetrievalError(#[source] sqlx::Error),
}

impl std::fmt::Debug for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl std::fmt::Debug for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for IntakeError {
    fn status_code(&self) -> StatusCode {
        match self {
            IntakeError::ValidationError(_) => StatusCode::BAD_REQUEST,
            IntakeError::PersistenceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            IntakeError::ValidationError(_) => HttpResponse::BadRequest()
                .json(serde_json::json!({ "message": self.to_string() })),
            IntakeError::PersistenceError(err) => HttpResponse::InternalServerError().json(
                serde_json::json!({ "message": self.to_string(), "details": err.to_string() }),
            ),
        }
    }
}

impl ResponseError for ListError {
    fn status_code(&self) -> StatusCode {
        match self {
            ListError::RetrievalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ListError::RetrievalError(err) => HttpResponse::InternalServerError().json(
                serde_json::json!({ "message": self.to_string(), "details": err.to_string() }),
            ),
        }
    }
}
