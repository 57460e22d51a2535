#[derive(Debug, Clone, serde::Serialize)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    // Presence is the only requirement. The form accepts whatever the
    // submitter typed, so no format check happens here.
    pub fn parse(email: String) -> Result<SubmitterEmail, String> {
        if email.trim().is_empty() {
            return Err(String::from("Submitter email cannot be empty"));
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
