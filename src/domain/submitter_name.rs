#[derive(Debug, Clone, serde::Serialize)]
pub struct SubmitterName(String);

impl SubmitterName {
    pub fn parse(name: String) -> Result<SubmitterName, String> {
        if name.trim().is_empty() {
            return Err(String::from("Submitter name cannot be empty"));
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
