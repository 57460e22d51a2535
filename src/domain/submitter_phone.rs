#[derive(Debug, Clone, serde::Serialize)]
pub struct SubmitterPhone(String);

impl SubmitterPhone {
    pub fn parse(phone: String) -> Result<SubmitterPhone, String> {
        if phone.trim().is_empty() {
            return Err(String::from("Submitter phone cannot be empty"));
        }

        Ok(Self(phone))
    }
}

impl AsRef<str> for SubmitterPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
