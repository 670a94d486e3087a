use crate::group_sync::domain::model::enums::group_sync_domain_error::GroupSyncDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(value: String) -> Result<Self, GroupSyncDomainError> {
        let trimmed = value.trim().trim_start_matches("customers/");
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(GroupSyncDomainError::InvalidCustomerId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
