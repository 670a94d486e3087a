use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    gcp_integration::GcpIntegrationClients,
    group_sync::{
        application::command_services::group_sync_command_service_impl::GroupSyncCommandServiceImpl,
        domain::services::group_sync_command_service::GroupSyncCommandService,
        infrastructure::persistence::repositories::bigquery::bigquery_user_groups_table_repository_impl::BigQueryUserGroupsTableRepositoryImpl,
        interfaces::rest::controllers::group_sync_rest_controller::{
            GroupSyncRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_group_sync_router(
    config: &AppConfig,
    clients: &GcpIntegrationClients,
) -> Option<Router> {
    let settings = config.group_sync.clone()?;

    let user_groups_table_repository = Arc::new(BigQueryUserGroupsTableRepositoryImpl::new(
        clients.http_client.clone(),
        config.endpoints.bigquery.clone(),
    ));
    let command_service: Arc<dyn GroupSyncCommandService> = Arc::new(GroupSyncCommandServiceImpl::new(
        clients.group_directory.clone(),
        user_groups_table_repository,
    ));

    Some(router(GroupSyncRestControllerState {
        command_service,
        settings,
    }))
}
