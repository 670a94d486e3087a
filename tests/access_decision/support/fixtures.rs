use masking_policy_functions::access_decision::{
    domain::model::queries::check_principal_access_query::{
        CheckPrincipalAccessQuery, CheckPrincipalAccessQueryParts,
    },
    interfaces::rest::resources::remote_function_request_resource::RemoteFunctionRequestResource,
};

pub const PROJECT_ID: &str = "analytics-prod";
pub const ORGANIZATION_ID: &str = "123456789";
pub const SESSION_USER: &str = "u@co.com";

pub fn check_query(principal_spec: &str) -> CheckPrincipalAccessQuery {
    check_query_as(SESSION_USER, principal_spec)
}

pub fn check_query_as(session_user: &str, principal_spec: &str) -> CheckPrincipalAccessQuery {
    CheckPrincipalAccessQuery::new(CheckPrincipalAccessQueryParts {
        session_user: session_user.to_string(),
        principal_spec: principal_spec.to_string(),
        dataset: "ds1".to_string(),
        view: "v1".to_string(),
        request_id: None,
    })
    .expect("valid check query")
}

pub fn remote_function_request(calls: &[&[&str]]) -> RemoteFunctionRequestResource {
    RemoteFunctionRequestResource {
        request_id: Some("124ab1c".to_string()),
        caller: Some(format!(
            "//bigquery.googleapis.com/projects/{PROJECT_ID}/jobs/job_1"
        )),
        session_user: SESSION_USER.to_string(),
        user_defined_context: None,
        calls: calls
            .iter()
            .map(|call| call.iter().map(|arg| arg.to_string()).collect())
            .collect(),
    }
}
