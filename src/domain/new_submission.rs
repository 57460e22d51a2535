use actix_web::web;
use serde::Deserialize;

use crate::domain::submitter_email::SubmitterEmail;
use crate::domain::submitter_name::SubmitterName;
use crate::domain::submitter_phone::SubmitterPhone;

pub struct NewSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub phone: SubmitterPhone,
    pub message: String,
}

// Every field is optional at the deserialization layer so that an absent
// key reaches the domain parsers instead of being rejected by the Json
// extractor; an absent required field must produce the same response as
// an empty one.
#[derive(Deserialize)]
pub struct NewSubmissionBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<web::Json<NewSubmissionBody>> for NewSubmission {
    type Error = String;

    fn try_from(body: web::Json<NewSubmissionBody>) -> Result<Self, Self::Error> {
        let name = SubmitterName::parse(body.name.clone().unwrap_or_default())?;
        let email = SubmitterEmail::parse(body.email.clone().unwrap_or_default())?;
        let phone = SubmitterPhone::parse(body.phone.clone().unwrap_or_default())?;
        let message = body.message.clone().unwrap_or_default();

        Ok(NewSubmission {
            name,
            email,
            phone,
            message,
        })
    }
}
