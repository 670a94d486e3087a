use axum::{Router, routing::get};
use dotenvy::dotenv;
use masking_policy_functions::{
    access_decision::{
        build_access_decision_router,
        interfaces::rest::resources::{
            access_decision_error_response_resource::AccessDecisionErrorResponseResource,
            remote_function_reply_resource::RemoteFunctionReplyResource,
            remote_function_request_resource::RemoteFunctionRequestResource,
        },
    },
    config::app_config::AppConfig,
    gcp_integration::build_gcp_integration_clients,
    group_sync::{
        build_group_sync_router,
        interfaces::rest::resources::{
            group_sync_error_response_resource::GroupSyncErrorResponseResource,
            sync_user_groups_response_resource::SyncUserGroupsResponseResource,
        },
    },
};
use tracing::{error, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        masking_policy_functions::access_decision::interfaces::rest::controllers::access_decision_rest_controller::check_principal_access,
        masking_policy_functions::group_sync::interfaces::rest::controllers::group_sync_rest_controller::sync_user_groups
    ),
    components(
        schemas(
            RemoteFunctionRequestResource,
            RemoteFunctionReplyResource,
            AccessDecisionErrorResponseResource,
            SyncUserGroupsResponseResource,
            GroupSyncErrorResponseResource
        )
    ),
    tags(
        (name = "access-decision", description = "Principal access checks for masking policies"),
        (name = "group-sync", description = "Group membership table refresh")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,masking_policy_functions=debug".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let clients = match build_gcp_integration_clients(&config) {
        Ok(clients) => clients,
        Err(e) => {
            error!(error = %e, "failed to build google api clients");
            std::process::exit(1);
        }
    };

    let mut app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(build_access_decision_router(&config, &clients));

    match build_group_sync_router(&config, &clients) {
        Some(group_sync_router) => app = app.merge(group_sync_router),
        None => warn!("group sync settings not provided, /sync-user-groups is disabled"),
    }

    let app = app
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %addr, "failed to bind server address");
            std::process::exit(1);
        }
    };

    info!(
        project_id = config.service_account_key.project_id(),
        addr = %addr,
        "masking policy functions listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
