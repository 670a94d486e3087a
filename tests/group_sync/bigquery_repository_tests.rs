use std::{sync::Arc, time::Duration};

use masking_policy_functions::{
    gcp_integration::application::acl::google_api_http_client::GoogleApiHttpClient,
    group_sync::{
        domain::model::enums::group_sync_domain_error::GroupSyncDomainError,
        infrastructure::persistence::repositories::{
            bigquery::bigquery_user_groups_table_repository_impl::BigQueryUserGroupsTableRepositoryImpl,
            user_groups_table_repository::UserGroupsTableRepository,
        },
    },
};
use serde_json::{Value, json};

use crate::support::{
    fake_google_server::FakeGoogleServer,
    google_fakes::{STATIC_TOKEN, StaticAccessTokenProvider},
    membership, sync_settings,
};

const UPLOAD_PATH: &str = "/upload/bigquery/v2/projects/analytics-prod/jobs";
const JOB_PATH: &str = "/bigquery/v2/projects/analytics-prod/jobs/job-1";

fn job(state: &str) -> Value {
    json!({
        "jobReference": {"projectId": "analytics-prod", "jobId": "job-1", "location": "EU"},
        "status": {"state": state}
    })
}

fn repository(server: &FakeGoogleServer, max_polls: u32) -> BigQueryUserGroupsTableRepositoryImpl {
    let client = Arc::new(GoogleApiHttpClient::new(
        reqwest::Client::new(),
        Arc::new(StaticAccessTokenProvider::new()),
    ));
    BigQueryUserGroupsTableRepositoryImpl::new(client, server.base_url())
        .with_polling(Duration::from_millis(10), max_polls)
}

#[tokio::test]
async fn rows_are_loaded_with_truncating_job_and_polled_to_completion() {
    let server = FakeGoogleServer::start().await;
    server.respond("POST", UPLOAD_PATH, 200, job("RUNNING"));
    server.respond("GET", JOB_PATH, 200, job("DONE"));

    repository(&server, 5)
        .replace_all(
            &sync_settings().destination,
            &[membership("a@x", "g1@x"), membership("b@x", "g1@x")],
        )
        .await
        .expect("table replaced");

    let uploads = server.requests_to(UPLOAD_PATH);
    assert_eq!(uploads.len(), 1);
    let upload = &uploads[0];
    assert_eq!(upload.query_value("uploadType"), Some("multipart"));
    assert_eq!(
        upload.authorization.as_deref(),
        Some(format!("Bearer {STATIC_TOKEN}").as_str())
    );
    assert!(upload.body.contains("\"writeDisposition\":\"WRITE_TRUNCATE\""));
    assert!(upload.body.contains("\"datasetId\":\"security\""));
    assert!(upload.body.contains("\"tableId\":\"user_groups\""));
    assert!(upload.body.contains(
        "{\"userEmail\":\"a@x\",\"userGroup\":\"g1@x\"}\n{\"userEmail\":\"b@x\",\"userGroup\":\"g1@x\"}\n"
    ));

    let polls = server.requests_to(JOB_PATH);
    assert_eq!(polls.len(), 1);
    assert_eq!(polls[0].query_value("location"), Some("EU"));
}

#[tokio::test]
async fn job_done_at_submission_needs_no_polling() {
    let server = FakeGoogleServer::start().await;
    server.respond("POST", UPLOAD_PATH, 200, job("DONE"));

    repository(&server, 5)
        .replace_all(&sync_settings().destination, &[])
        .await
        .expect("table replaced");

    assert!(server.requests_to(JOB_PATH).is_empty());
}

#[tokio::test]
async fn error_result_on_done_job_fails_the_write() {
    let server = FakeGoogleServer::start().await;
    server.respond("POST", UPLOAD_PATH, 200, job("RUNNING"));
    server.respond(
        "GET",
        JOB_PATH,
        200,
        json!({
            "jobReference": {"projectId": "analytics-prod", "jobId": "job-1", "location": "EU"},
            "status": {
                "state": "DONE",
                "errorResult": {"reason": "invalid", "message": "Error while reading data"}
            }
        }),
    );

    let error = repository(&server, 5)
        .replace_all(
            &sync_settings().destination,
            &[membership("a@x", "g1@x")],
        )
        .await
        .expect_err("write must fail");

    assert!(matches!(
        error,
        GroupSyncDomainError::TableWriteFailed(m) if m.contains("Error while reading data")
    ));
}

#[tokio::test]
async fn job_finishing_on_the_last_poll_succeeds() {
    let server = FakeGoogleServer::start().await;
    server.respond("POST", UPLOAD_PATH, 200, job("RUNNING"));
    server.respond("GET", JOB_PATH, 200, job("DONE"));

    repository(&server, 1)
        .replace_all(&sync_settings().destination, &[membership("a@x", "g1@x")])
        .await
        .expect("table replaced");

    assert_eq!(server.requests_to(JOB_PATH).len(), 1);
}

#[tokio::test]
async fn job_still_running_after_all_polls_times_out() {
    let server = FakeGoogleServer::start().await;
    server.respond("POST", UPLOAD_PATH, 200, job("RUNNING"));
    server.respond("GET", JOB_PATH, 200, job("RUNNING"));

    let error = repository(&server, 2)
        .replace_all(&sync_settings().destination, &[membership("a@x", "g1@x")])
        .await
        .expect_err("write must time out");

    assert!(matches!(
        error,
        GroupSyncDomainError::TableWriteFailed(m) if m.contains("did not finish in time")
    ));
    assert_eq!(server.requests_to(JOB_PATH).len(), 2);
}

#[tokio::test]
async fn rejected_upload_fails_without_polling() {
    let server = FakeGoogleServer::start().await;
    server.respond(
        "POST",
        UPLOAD_PATH,
        403,
        json!({"error": {"code": 403, "message": "Access Denied: Table analytics-prod:security.user_groups", "status": "PERMISSION_DENIED"}}),
    );

    let error = repository(&server, 5)
        .replace_all(&sync_settings().destination, &[membership("a@x", "g1@x")])
        .await
        .expect_err("write must fail");

    assert!(matches!(
        error,
        GroupSyncDomainError::TableWriteFailed(m) if m.contains("Access Denied")
    ));
    assert!(server.requests_to(JOB_PATH).is_empty());
}
