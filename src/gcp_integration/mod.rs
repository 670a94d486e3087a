use std::sync::Arc;

use crate::{
    config::app_config::AppConfig,
    gcp_integration::{
        application::acl::{
            google_api_http_client::GoogleApiHttpClient,
            rest_group_directory_facade_impl::RestGroupDirectoryFacadeImpl,
            rest_policy_analyzer_facade_impl::RestPolicyAnalyzerFacadeImpl,
            rest_scope_resolver_facade_impl::RestScopeResolverFacadeImpl,
            service_account_token_provider_impl::ServiceAccountTokenProviderImpl,
        },
        domain::model::enums::gcp_integration_error::GcpIntegrationError,
        interfaces::acl::{
            group_directory_facade::GroupDirectoryFacade,
            policy_analyzer_facade::PolicyAnalyzerFacade,
            scope_resolver_facade::ScopeResolverFacade,
        },
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

#[derive(Clone)]
pub struct GcpIntegrationClients {
    pub http_client: Arc<GoogleApiHttpClient>,
    pub group_directory: Arc<dyn GroupDirectoryFacade>,
    pub scope_resolver: Arc<dyn ScopeResolverFacade>,
    pub policy_analyzer: Arc<dyn PolicyAnalyzerFacade>,
}

pub fn build_gcp_integration_clients(
    config: &AppConfig,
) -> Result<GcpIntegrationClients, GcpIntegrationError> {
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .map_err(|e| GcpIntegrationError::Unavailable("http client", e.to_string()))?;

    let token_provider = Arc::new(ServiceAccountTokenProviderImpl::new(
        config.service_account_key.clone(),
        http.clone(),
    )?);
    let http_client = Arc::new(GoogleApiHttpClient::new(http, token_provider));

    let group_directory: Arc<dyn GroupDirectoryFacade> = Arc::new(RestGroupDirectoryFacadeImpl::new(
        http_client.clone(),
        config.endpoints.cloud_identity.clone(),
        config.directory_page_size,
    ));
    let scope_resolver: Arc<dyn ScopeResolverFacade> = Arc::new(RestScopeResolverFacadeImpl::new(
        http_client.clone(),
        config.endpoints.resource_manager.clone(),
    ));
    let policy_analyzer: Arc<dyn PolicyAnalyzerFacade> = Arc::new(RestPolicyAnalyzerFacadeImpl::new(
        http_client.clone(),
        config.endpoints.cloud_asset.clone(),
    ));

    Ok(GcpIntegrationClients {
        http_client,
        group_directory,
        scope_resolver,
        policy_analyzer,
    })
}
