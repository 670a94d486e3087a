use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;
use uuid::Uuid;

use crate::{
    gcp_integration::{
        application::acl::google_api_http_client::GoogleApiHttpClient,
        interfaces::acl::access_token_provider::BIGQUERY_SCOPE,
    },
    group_sync::{
        domain::model::{
            entities::membership_record::MembershipRecord,
            enums::group_sync_domain_error::GroupSyncDomainError,
            value_objects::destination_table_id::DestinationTableId,
        },
        infrastructure::persistence::repositories::user_groups_table_repository::UserGroupsTableRepository,
    },
};

const SERVICE: &str = "bigquery";
const MULTIPART_BOUNDARY: &str = "user_groups_load_part";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobResource {
    job_reference: JobReference,
    status: Option<JobStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobReference {
    job_id: String,
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobStatus {
    state: String,
    error_result: Option<JobError>,
}

#[derive(Debug, Deserialize)]
struct JobError {
    #[serde(default)]
    reason: String,
    #[serde(default)]
    message: String,
}

pub struct BigQueryUserGroupsTableRepositoryImpl {
    client: Arc<GoogleApiHttpClient>,
    base_url: String,
    poll_interval: Duration,
    max_polls: u32,
}

impl BigQueryUserGroupsTableRepositoryImpl {
    pub fn new(client: Arc<GoogleApiHttpClient>, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval: Duration::from_secs(1),
            max_polls: 300,
        }
    }

    pub fn with_polling(mut self, poll_interval: Duration, max_polls: u32) -> Self {
        self.poll_interval = poll_interval;
        self.max_polls = max_polls;
        self
    }

    pub fn load_job_metadata(destination: &DestinationTableId, job_id: &str) -> Value {
        json!({
            "jobReference": {
                "projectId": destination.project_id(),
                "jobId": job_id
            },
            "configuration": {
                "load": {
                    "destinationTable": {
                        "projectId": destination.project_id(),
                        "datasetId": destination.dataset_id(),
                        "tableId": destination.table_id()
                    },
                    "sourceFormat": "NEWLINE_DELIMITED_JSON",
                    "writeDisposition": "WRITE_TRUNCATE",
                    "createDisposition": "CREATE_IF_NEEDED",
                    "schema": {
                        "fields": [
                            {"name": "userEmail", "type": "STRING", "mode": "NULLABLE"},
                            {"name": "userGroup", "type": "STRING", "mode": "NULLABLE"}
                        ]
                    }
                }
            }
        })
    }

    pub fn newline_delimited_rows(
        records: &[MembershipRecord],
    ) -> Result<String, GroupSyncDomainError> {
        let mut rows = String::new();
        for record in records {
            let line = serde_json::to_string(record)
                .map_err(|e| GroupSyncDomainError::TableWriteFailed(e.to_string()))?;
            rows.push_str(&line);
            rows.push('\n');
        }
        Ok(rows)
    }

    pub fn multipart_body(metadata: &Value, rows: &str) -> String {
        format!(
            "--{b}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{metadata}\r\n\
             --{b}\r\nContent-Type: application/octet-stream\r\n\r\n{rows}\r\n\
             --{b}--\r\n",
            b = MULTIPART_BOUNDARY,
        )
    }

    fn job_outcome(job: &JobResource) -> Option<Result<(), GroupSyncDomainError>> {
        let status = job.status.as_ref()?;
        if status.state != "DONE" {
            return None;
        }
        Some(match &status.error_result {
            None => Ok(()),
            Some(error) => Err(GroupSyncDomainError::TableWriteFailed(format!(
                "load job {} failed ({}): {}",
                job.job_reference.job_id, error.reason, error.message
            ))),
        })
    }

    async fn wait_for_completion(
        &self,
        project_id: &str,
        mut job: JobResource,
    ) -> Result<(), GroupSyncDomainError> {
        for _ in 0..self.max_polls {
            if let Some(outcome) = Self::job_outcome(&job) {
                return outcome;
            }

            tokio::time::sleep(self.poll_interval).await;

            let url = format!(
                "{}/bigquery/v2/projects/{}/jobs/{}",
                self.base_url, project_id, job.job_reference.job_id
            );
            let query = job
                .job_reference
                .location
                .iter()
                .map(|location| ("location", location.clone()))
                .collect::<Vec<_>>();

            job = self
                .client
                .get_json(SERVICE, &url, &query, &[BIGQUERY_SCOPE])
                .await
                .map_err(|e| GroupSyncDomainError::TableWriteFailed(e.to_string()))?;
        }

        if let Some(outcome) = Self::job_outcome(&job) {
            return outcome;
        }

        Err(GroupSyncDomainError::TableWriteFailed(format!(
            "load job {} did not finish in time",
            job.job_reference.job_id
        )))
    }
}

#[async_trait]
impl UserGroupsTableRepository for BigQueryUserGroupsTableRepositoryImpl {
    async fn replace_all(
        &self,
        destination: &DestinationTableId,
        records: &[MembershipRecord],
    ) -> Result<(), GroupSyncDomainError> {
        let job_id = format!("user_groups_sync_{}", Uuid::now_v7().simple());
        let metadata = Self::load_job_metadata(destination, &job_id);
        let body = Self::multipart_body(&metadata, &Self::newline_delimited_rows(records)?);

        let url = format!(
            "{}/upload/bigquery/v2/projects/{}/jobs",
            self.base_url,
            destination.project_id()
        );
        let request = self
            .client
            .http()
            .post(&url)
            .query(&[("uploadType", "multipart")])
            .header(
                CONTENT_TYPE,
                format!("multipart/related; boundary={MULTIPART_BOUNDARY}"),
            )
            .body(body);
        let request = self
            .client
            .authorize(request, &[BIGQUERY_SCOPE])
            .await
            .map_err(|e| GroupSyncDomainError::TableWriteFailed(e.to_string()))?;

        let job: JobResource = self
            .client
            .execute(SERVICE, request)
            .await
            .map_err(|e| GroupSyncDomainError::TableWriteFailed(e.to_string()))?;

        debug!(
            job_id = %job.job_reference.job_id,
            destination = %destination.qualified_name(),
            rows = records.len(),
            "load job submitted"
        );

        self.wait_for_completion(destination.project_id(), job).await
    }
}
