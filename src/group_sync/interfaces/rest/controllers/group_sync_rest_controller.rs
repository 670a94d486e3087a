use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use tracing::error;

use crate::{
    config::app_config::GroupSyncSettings,
    group_sync::{
        domain::{
            model::{
                commands::sync_user_groups_command::SyncUserGroupsCommand,
                enums::group_sync_domain_error::GroupSyncDomainError,
            },
            services::group_sync_command_service::GroupSyncCommandService,
        },
        interfaces::rest::resources::{
            group_sync_error_response_resource::GroupSyncErrorResponseResource,
            sync_user_groups_response_resource::SyncUserGroupsResponseResource,
        },
    },
};

#[derive(Clone)]
pub struct GroupSyncRestControllerState {
    pub command_service: Arc<dyn GroupSyncCommandService>,
    pub settings: GroupSyncSettings,
}

pub fn router(state: GroupSyncRestControllerState) -> Router {
    Router::new()
        .route("/sync-user-groups", post(sync_user_groups))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/sync-user-groups",
    tag = "group-sync",
    responses(
        (status = 200, description = "Membership table replaced", body = SyncUserGroupsResponseResource),
        (status = 500, description = "Directory or table failure", body = GroupSyncErrorResponseResource)
    )
)]
pub async fn sync_user_groups(
    State(state): State<GroupSyncRestControllerState>,
) -> Result<Json<SyncUserGroupsResponseResource>, (StatusCode, Json<GroupSyncErrorResponseResource>)>
{
    let command = SyncUserGroupsCommand::new(
        state.settings.customer_id.clone(),
        state.settings.destination.clone(),
    );
    let run_id = command.run_id();

    state
        .command_service
        .handle_sync_user_groups(command)
        .await
        .map_err(|e| {
            error!(run_id = %run_id, error = %e, "user groups sync failed");
            map_domain_error(e)
        })?;

    Ok(Json(SyncUserGroupsResponseResource::default()))
}

fn map_domain_error(
    error: GroupSyncDomainError,
) -> (StatusCode, Json<GroupSyncErrorResponseResource>) {
    let status = match error {
        GroupSyncDomainError::InvalidCustomerId
        | GroupSyncDomainError::InvalidDestinationTable(_)
        | GroupSyncDomainError::InvalidDatasetId(_)
        | GroupSyncDomainError::InvalidTableId(_) => StatusCode::BAD_REQUEST,
        GroupSyncDomainError::DirectoryEnumerationFailed(_)
        | GroupSyncDomainError::TableWriteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(GroupSyncErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
