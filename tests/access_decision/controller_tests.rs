use axum::{Json, extract::State, http::StatusCode};
use masking_policy_functions::access_decision::interfaces::rest::controllers::access_decision_rest_controller::check_principal_access;

use crate::support::{SESSION_USER, create_harness, remote_function_request};

#[tokio::test]
async fn role_with_one_analysis_result_replies_true() {
    let harness = create_harness();
    harness.policy_analyzer.set_result_count(1);

    let Json(reply) = check_principal_access(
        State(harness.controller_state()),
        Json(remote_function_request(&[&["role:roles/viewer", "ds1", "v1"]])),
    )
    .await
    .expect("reply expected");

    assert_eq!(
        serde_json::to_string(&reply).expect("serializable reply"),
        r#"{"replies":["True"]}"#
    );
}

#[tokio::test]
async fn role_without_analysis_results_replies_false() {
    let harness = create_harness();
    harness.policy_analyzer.set_result_count(0);

    let Json(reply) = check_principal_access(
        State(harness.controller_state()),
        Json(remote_function_request(&[&["role:roles/viewer", "ds1", "v1"]])),
    )
    .await
    .expect("reply expected");

    assert_eq!(reply.replies, vec!["False"]);
}

#[tokio::test]
async fn missing_group_replies_with_in_band_error() {
    let harness = create_harness();

    let Json(reply) = check_principal_access(
        State(harness.controller_state()),
        Json(remote_function_request(&[&["nosuchgroup", "ds1", "v1"]])),
    )
    .await
    .expect("reply expected");

    assert_eq!(
        serde_json::to_string(&reply).expect("serializable reply"),
        r#"{"replies":["{\"errorMessage\": \"NotFound\"}"]}"#
    );
}

#[tokio::test]
async fn unparsable_analysis_replies_false() {
    let harness = create_harness();
    harness.policy_analyzer.return_invalid_response();

    let Json(reply) = check_principal_access(
        State(harness.controller_state()),
        Json(remote_function_request(&[&[
            "permission:bigquery.tables.getData",
            "ds1",
            "v1",
        ]])),
    )
    .await
    .expect("reply expected");

    assert_eq!(reply.replies, vec!["False"]);
}

#[tokio::test]
async fn group_member_replies_true_and_only_first_call_is_answered() {
    let harness = create_harness();
    harness
        .group_directory
        .add_group("analysts@co.com", "groups/01analysts", &[SESSION_USER]);

    let Json(reply) = check_principal_access(
        State(harness.controller_state()),
        Json(remote_function_request(&[
            &["group:analysts@co.com", "ds1", "v1"],
            &["role:roles/viewer", "ds2", "v2"],
        ])),
    )
    .await
    .expect("reply expected");

    assert_eq!(reply.replies, vec!["True"]);
    assert!(harness.policy_analyzer.requests().is_empty());
}

#[tokio::test]
async fn empty_batch_is_a_bad_request() {
    let harness = create_harness();

    let (status, Json(body)) = check_principal_access(
        State(harness.controller_state()),
        Json(remote_function_request(&[])),
    )
    .await
    .expect_err("request must be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.error_message.is_empty());
    assert!(harness.group_directory.looked_up_keys().is_empty());
}

#[tokio::test]
async fn call_without_view_is_a_bad_request() {
    let harness = create_harness();

    let (status, Json(body)) = check_principal_access(
        State(harness.controller_state()),
        Json(remote_function_request(&[&["group:analysts@co.com", "ds1"]])),
    )
    .await
    .expect_err("request must be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let wire = serde_json::to_value(&body).expect("serializable error");
    assert!(wire["errorMessage"].is_string());
    assert!(wire.get("message").is_none());
}
