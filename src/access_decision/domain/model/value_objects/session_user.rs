use crate::access_decision::domain::model::enums::access_decision_domain_error::AccessDecisionDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SessionUser(String);

impl SessionUser {
    pub fn new(value: String) -> Result<Self, AccessDecisionDomainError> {
        if value.trim().is_empty() {
            return Err(AccessDecisionDomainError::InvalidSessionUser);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn policy_identity(&self) -> String {
        format!("user:{}", self.0)
    }
}
