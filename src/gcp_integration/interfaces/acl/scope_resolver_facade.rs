use async_trait::async_trait;

use crate::gcp_integration::domain::model::{
    enums::gcp_integration_error::GcpIntegrationError,
    value_objects::organization_scope::OrganizationScope,
};

#[async_trait]
pub trait ScopeResolverFacade: Send + Sync {
    async fn resolve_organization(
        &self,
        project_id: &str,
    ) -> Result<OrganizationScope, GcpIntegrationError>;
}
