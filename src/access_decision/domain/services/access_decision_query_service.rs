use async_trait::async_trait;

use crate::access_decision::domain::model::{
    enums::access_decision_domain_error::AccessDecisionDomainError,
    queries::check_principal_access_query::CheckPrincipalAccessQuery,
};

#[async_trait]
pub trait AccessDecisionQueryService: Send + Sync {
    async fn handle_check_principal_access(
        &self,
        query: CheckPrincipalAccessQuery,
    ) -> Result<bool, AccessDecisionDomainError>;
}
