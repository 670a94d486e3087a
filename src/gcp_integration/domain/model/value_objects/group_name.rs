use crate::gcp_integration::domain::model::enums::gcp_integration_error::GcpIntegrationError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GroupName(String);

impl GroupName {
    pub fn new(value: String) -> Result<Self, GcpIntegrationError> {
        let trimmed = value.trim();
        if !trimmed.starts_with("groups/") || trimmed.len() == "groups/".len() {
            return Err(GcpIntegrationError::InvalidResponse(
                "cloud identity",
                format!("unexpected group name '{trimmed}'"),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
