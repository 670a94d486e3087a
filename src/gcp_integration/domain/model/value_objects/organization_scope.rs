use std::fmt;

use crate::gcp_integration::domain::model::enums::gcp_integration_error::GcpIntegrationError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OrganizationScope(String);

impl OrganizationScope {
    pub fn from_organization_id(id: &str) -> Result<Self, GcpIntegrationError> {
        let trimmed = id.trim().trim_start_matches("organizations/");
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(GcpIntegrationError::InvalidResponse(
                "resource manager",
                format!("invalid organization id '{id}'"),
            ));
        }
        Ok(Self(format!("organizations/{trimmed}")))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
