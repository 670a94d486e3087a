use async_trait::async_trait;

use crate::gcp_integration::domain::model::{
    enums::gcp_integration_error::GcpIntegrationError,
    value_objects::organization_scope::OrganizationScope,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IamPolicyAnalysisRequest {
    pub scope: OrganizationScope,
    pub full_resource_name: String,
    pub identity: String,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

#[async_trait]
pub trait PolicyAnalyzerFacade: Send + Sync {
    async fn analyze_iam_policy(
        &self,
        request: &IamPolicyAnalysisRequest,
    ) -> Result<usize, GcpIntegrationError>;
}
