use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::gcp_integration::{
    application::acl::google_api_http_client::GoogleApiHttpClient,
    domain::model::enums::gcp_integration_error::GcpIntegrationError,
    interfaces::acl::{
        access_token_provider::CLOUD_PLATFORM_SCOPE,
        policy_analyzer_facade::{IamPolicyAnalysisRequest, PolicyAnalyzerFacade},
    },
};

const SERVICE: &str = "cloud asset";

pub struct RestPolicyAnalyzerFacadeImpl {
    client: Arc<GoogleApiHttpClient>,
    base_url: String,
}

impl RestPolicyAnalyzerFacadeImpl {
    pub fn new(client: Arc<GoogleApiHttpClient>, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn query_parameters(request: &IamPolicyAnalysisRequest) -> Vec<(&'static str, String)> {
        let mut parameters = vec![
            (
                "analysisQuery.resourceSelector.fullResourceName",
                request.full_resource_name.clone(),
            ),
            (
                "analysisQuery.identitySelector.identity",
                request.identity.clone(),
            ),
        ];
        parameters.extend(
            request
                .roles
                .iter()
                .map(|role| ("analysisQuery.accessSelector.roles", role.clone())),
        );
        parameters.extend(
            request
                .permissions
                .iter()
                .map(|permission| ("analysisQuery.accessSelector.permissions", permission.clone())),
        );
        parameters
    }

    // an empty analysisResults list is omitted from mainAnalysis
    pub fn count_analysis_results(response: &Value) -> Result<usize, GcpIntegrationError> {
        let main_analysis = response
            .get("mainAnalysis")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                GcpIntegrationError::InvalidResponse(SERVICE, "mainAnalysis is missing".to_string())
            })?;

        match main_analysis.get("analysisResults") {
            None => Ok(0),
            Some(Value::Array(results)) => Ok(results.len()),
            Some(_) => Err(GcpIntegrationError::InvalidResponse(
                SERVICE,
                "analysisResults is not a list".to_string(),
            )),
        }
    }
}

#[async_trait]
impl PolicyAnalyzerFacade for RestPolicyAnalyzerFacadeImpl {
    async fn analyze_iam_policy(
        &self,
        request: &IamPolicyAnalysisRequest,
    ) -> Result<usize, GcpIntegrationError> {
        let url = format!(
            "{}/v1/{}:analyzeIamPolicy",
            self.base_url.trim_end_matches('/'),
            request.scope.value()
        );
        let parameters = Self::query_parameters(request);

        let response: Value = self
            .client
            .get_json(SERVICE, &url, &parameters, &[CLOUD_PLATFORM_SCOPE])
            .await?;

        Self::count_analysis_results(&response)
    }
}
