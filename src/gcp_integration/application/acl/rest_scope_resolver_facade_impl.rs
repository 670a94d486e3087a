use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::gcp_integration::{
    application::acl::google_api_http_client::GoogleApiHttpClient,
    domain::model::{
        enums::gcp_integration_error::GcpIntegrationError,
        value_objects::organization_scope::OrganizationScope,
    },
    interfaces::acl::{
        access_token_provider::CLOUD_PLATFORM_SCOPE, scope_resolver_facade::ScopeResolverFacade,
    },
};

const SERVICE: &str = "resource manager";

#[derive(Debug, Deserialize)]
pub struct AncestryResponse {
    #[serde(default)]
    pub ancestor: Vec<Ancestor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ancestor {
    pub resource_id: AncestorResourceId,
}

#[derive(Debug, Deserialize)]
pub struct AncestorResourceId {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
}

pub struct RestScopeResolverFacadeImpl {
    client: Arc<GoogleApiHttpClient>,
    base_url: String,
}

impl RestScopeResolverFacadeImpl {
    pub fn new(client: Arc<GoogleApiHttpClient>, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn organization_from_ancestry(
        project_id: &str,
        ancestry: &AncestryResponse,
    ) -> Result<OrganizationScope, GcpIntegrationError> {
        let organization = ancestry
            .ancestor
            .iter()
            .find(|ancestor| ancestor.resource_id.resource_type == "organization")
            .ok_or_else(|| GcpIntegrationError::OrganizationNotFound(project_id.to_string()))?;

        OrganizationScope::from_organization_id(&organization.resource_id.id)
    }
}

#[async_trait]
impl ScopeResolverFacade for RestScopeResolverFacadeImpl {
    async fn resolve_organization(
        &self,
        project_id: &str,
    ) -> Result<OrganizationScope, GcpIntegrationError> {
        let url = format!(
            "{}/v1/projects/{}:getAncestry",
            self.base_url.trim_end_matches('/'),
            project_id
        );

        let ancestry: AncestryResponse = self
            .client
            .post_json(SERVICE, &url, &json!({}), &[CLOUD_PLATFORM_SCOPE])
            .await?;

        let scope = Self::organization_from_ancestry(project_id, &ancestry)?;
        debug!(project_id, scope = %scope, "resolved organization scope");
        Ok(scope)
    }
}
