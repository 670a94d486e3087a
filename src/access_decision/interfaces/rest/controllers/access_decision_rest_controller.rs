use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::Value;
use tracing::{error, warn};
use validator::Validate;

use crate::access_decision::{
    domain::{
        model::{
            enums::access_decision_domain_error::AccessDecisionDomainError,
            queries::check_principal_access_query::CheckPrincipalAccessQuery,
        },
        services::access_decision_query_service::AccessDecisionQueryService,
    },
    interfaces::rest::resources::{
        access_decision_error_response_resource::AccessDecisionErrorResponseResource,
        remote_function_reply_resource::RemoteFunctionReplyResource,
        remote_function_request_resource::RemoteFunctionRequestResource,
    },
};

#[derive(Clone)]
pub struct AccessDecisionRestControllerState {
    pub query_service: Arc<dyn AccessDecisionQueryService>,
}

pub fn router(state: AccessDecisionRestControllerState) -> Router {
    Router::new()
        .route("/check-principal-access", post(check_principal_access))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/check-principal-access",
    tag = "access-decision",
    request_body = RemoteFunctionRequestResource,
    responses(
        (status = 200, description = "One reply per consumed call: \"True\", \"False\" or an in-band error payload", body = RemoteFunctionReplyResource),
        (status = 400, description = "Malformed remote function request", body = AccessDecisionErrorResponseResource)
    )
)]
pub async fn check_principal_access(
    State(state): State<AccessDecisionRestControllerState>,
    Json(request): Json<RemoteFunctionRequestResource>,
) -> Result<
    Json<RemoteFunctionReplyResource>,
    (StatusCode, Json<AccessDecisionErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AccessDecisionErrorResponseResource {
                error_message: validation_error.to_string(),
            }),
        ));
    }

    if request.calls.len() > 1 {
        warn!(
            request_id = request.request_id.as_deref().unwrap_or("-"),
            calls = request.calls.len(),
            "only the first call of the batch is evaluated"
        );
    }

    let query = CheckPrincipalAccessQuery::from_first_call(
        request.session_user,
        &request.calls,
        request.request_id,
    )
    .map_err(map_domain_error)?;

    let result = state
        .query_service
        .handle_check_principal_access(query)
        .await;

    Ok(Json(RemoteFunctionReplyResource {
        replies: vec![encode_reply(result)],
    }))
}

pub fn encode_reply(result: Result<bool, AccessDecisionDomainError>) -> String {
    match result {
        Ok(true) => "True".to_string(),
        Ok(false) => "False".to_string(),
        Err(
            AccessDecisionDomainError::GroupLookupFailed(message)
            | AccessDecisionDomainError::MembershipListingFailed(message),
        ) => {
            warn!(error = %message, "group check failed, replying with error payload");
            in_band_error_payload(&message)
        }
        Err(other) => {
            error!(error = %other, "access check failed closed");
            "False".to_string()
        }
    }
}

pub fn in_band_error_payload(message: &str) -> String {
    format!(
        "{{\"errorMessage\": {}}}",
        Value::String(message.to_string())
    )
}

fn map_domain_error(
    error: AccessDecisionDomainError,
) -> (StatusCode, Json<AccessDecisionErrorResponseResource>) {
    let status = match error {
        AccessDecisionDomainError::MissingCall
        | AccessDecisionDomainError::IncompleteCall
        | AccessDecisionDomainError::InvalidSessionUser => StatusCode::BAD_REQUEST,
        AccessDecisionDomainError::GroupLookupFailed(_)
        | AccessDecisionDomainError::MembershipListingFailed(_)
        | AccessDecisionDomainError::ScopeResolutionFailed(_)
        | AccessDecisionDomainError::PolicyAnalysisFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(AccessDecisionErrorResponseResource {
            error_message: error.to_string(),
        }),
    )
}
