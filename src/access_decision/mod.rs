use std::sync::Arc;

use axum::Router;

use crate::{
    access_decision::{
        application::query_services::access_decision_query_service_impl::AccessDecisionQueryServiceImpl,
        domain::services::access_decision_query_service::AccessDecisionQueryService,
        interfaces::rest::controllers::access_decision_rest_controller::{
            AccessDecisionRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
    gcp_integration::GcpIntegrationClients,
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_access_decision_router(config: &AppConfig, clients: &GcpIntegrationClients) -> Router {
    let query_service: Arc<dyn AccessDecisionQueryService> = Arc::new(AccessDecisionQueryServiceImpl::new(
        clients.group_directory.clone(),
        clients.scope_resolver.clone(),
        clients.policy_analyzer.clone(),
        config.service_account_key.project_id().to_string(),
    ));

    router(AccessDecisionRestControllerState { query_service })
}
