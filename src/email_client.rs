use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time;

use crate::domain::submission::Submission;
use crate::domain::submitter_email::SubmitterEmail;

const REQUEST_TIMEOUT: time::Duration = time::Duration::from_secs(10);

/// Outbound mail collaborator. Every new submission produces exactly one
/// notification addressed to the configured recipient; failures are never
/// retried here.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: SubmitterEmail,
    recipient: SubmitterEmail,
    api_key: Secret<String>,
}

#[derive(serde::Serialize)]
pub struct SendEmailBody {
    personalizations: Vec<SendgridPersonalization>,
    from: SendgridEmail,
    subject: String,
    content: Vec<SendgridContent>,
}

#[derive(serde::Serialize)]
struct SendgridEmail {
    email: String,
}

#[derive(serde::Serialize)]
struct SendgridPersonalization {
    to: Vec<SendgridEmail>,
}

#[derive(serde::Serialize)]
struct SendgridContent {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: SubmitterEmail,
        recipient: SubmitterEmail,
        api_key: Secret<String>,
        timeout: Option<time::Duration>,
    ) -> EmailClient {
        let http_client = Client::builder()
            .timeout(timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()
            .unwrap();

        EmailClient {
            http_client,
            base_url,
            sender,
            recipient,
            api_key,
        }
    }

    /// Sends the notification email for a freshly stored submission, with
    /// a plain-text and an html part carrying the same fields.
    pub async fn send_submission_notice(
        &self,
        submission: &Submission,
    ) -> Result<(), reqwest::Error> {
        let subject = format!(
            "New contact form submission from {}",
            submission.name.as_ref()
        );
        let text_content = format!(
            "Name: {}\nPhone: {}\nEmail: {}\nMessage: {}\nSubmission id: {}",
            submission.name.as_ref(),
            submission.phone.as_ref(),
            submission.email.as_ref(),
            submission.message,
            submission.id
        );
        let html_content = format!(
            r#"
                <div>
                    <h1>New contact form submission</h1>
                    <p><strong>Name:</strong> {}</p>
                    <p><strong>Phone:</strong> {}</p>
                    <p><strong>Email:</strong> {}</p>
                    <p><strong>Message:</strong> {}</p>
                    <p><strong>Submission id:</strong> {}</p>
                </div>
            "#,
            submission.name.as_ref(),
            submission.phone.as_ref(),
            submission.email.as_ref(),
            submission.message,
            submission.id
        );

        self.send_email(&subject, &text_content, &html_content).await
    }

    async fn send_email(
        &self,
        subject: &str,
        text_content: &str,
        html_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/mail/send", self.base_url);
        let body = SendEmailBody {
            from: SendgridEmail {
                email: String::from(self.sender.as_ref()),
            },
            personalizations: vec![SendgridPersonalization {
                to: vec![SendgridEmail {
                    email: String::from(self.recipient.as_ref()),
                }],
            }],
            subject: String::from(subject),
            content: vec![
                SendgridContent {
                    content_type: String::from("text/plain"),
                    value: String::from(text_content),
                },
                SendgridContent {
                    content_type: String::from("text/html"),
                    value: String::from(html_content),
                },
            ],
        };

        self.http_client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?; // return an error when server response status code is 4xx or 5xx

        Ok(())
    }
}
