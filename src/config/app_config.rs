use std::time::Duration;

use thiserror::Error;

use crate::{
    gcp_integration::domain::model::value_objects::service_account_key::ServiceAccountKey,
    group_sync::domain::model::{
        enums::group_sync_domain_error::GroupSyncDomainError,
        value_objects::{customer_id::CustomerId, destination_table_id::DestinationTableId},
    },
};

const GROUP_SYNC_VARIABLES: [&str; 3] = ["CUSTOMER_ID", "USER_GROUPS_DATASET", "USER_GROUPS_TABLE"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("environment variable {name} is invalid: {reason}")]
    InvalidVariable { name: &'static str, reason: String },

    #[error("group sync configuration is incomplete, missing: {0}")]
    IncompleteGroupSync(String),
}

#[derive(Clone, Debug)]
pub struct GoogleApiEndpoints {
    pub cloud_identity: String,
    pub resource_manager: String,
    pub cloud_asset: String,
    pub bigquery: String,
}

impl Default for GoogleApiEndpoints {
    fn default() -> Self {
        Self {
            cloud_identity: "https://cloudidentity.googleapis.com".to_string(),
            resource_manager: "https://cloudresourcemanager.googleapis.com".to_string(),
            cloud_asset: "https://cloudasset.googleapis.com".to_string(),
            bigquery: "https://bigquery.googleapis.com".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GroupSyncSettings {
    pub customer_id: CustomerId,
    pub destination: DestinationTableId,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub service_account_key: ServiceAccountKey,
    pub group_sync: Option<GroupSyncSettings>,
    pub http_timeout: Duration,
    pub directory_page_size: u32,
    pub endpoints: GoogleApiEndpoints,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_key = lookup("SERVICE_ACCOUNT_KEY")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingVariable("SERVICE_ACCOUNT_KEY"))?;
        let service_account_key =
            ServiceAccountKey::from_json(&raw_key).map_err(|e| ConfigError::InvalidVariable {
                name: "SERVICE_ACCOUNT_KEY",
                reason: e.to_string(),
            })?;

        let group_sync = Self::group_sync_settings(&lookup, service_account_key.project_id())?;

        let defaults = GoogleApiEndpoints::default();
        let endpoints = GoogleApiEndpoints {
            cloud_identity: lookup("CLOUD_IDENTITY_BASE_URL").unwrap_or(defaults.cloud_identity),
            resource_manager: lookup("RESOURCE_MANAGER_BASE_URL")
                .unwrap_or(defaults.resource_manager),
            cloud_asset: lookup("CLOUD_ASSET_BASE_URL").unwrap_or(defaults.cloud_asset),
            bigquery: lookup("BIGQUERY_BASE_URL").unwrap_or(defaults.bigquery),
        };

        Ok(Self {
            port: parse_or(&lookup, "PORT", 8080)?,
            service_account_key,
            group_sync,
            http_timeout: Duration::from_secs(parse_or(&lookup, "HTTP_TIMEOUT_SECS", 30)?),
            directory_page_size: parse_or(&lookup, "DIRECTORY_PAGE_SIZE", 200)?,
            endpoints,
        })
    }

    fn group_sync_settings<F>(
        lookup: &F,
        project_id: &str,
    ) -> Result<Option<GroupSyncSettings>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let values = GROUP_SYNC_VARIABLES
            .map(|name| lookup(name).filter(|value| !value.trim().is_empty()));

        let missing = GROUP_SYNC_VARIABLES
            .iter()
            .zip(values.iter())
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect::<Vec<_>>();

        if missing.len() == GROUP_SYNC_VARIABLES.len() {
            return Ok(None);
        }
        if !missing.is_empty() {
            return Err(ConfigError::IncompleteGroupSync(missing.join(", ")));
        }

        let [customer_id, dataset, table] = values.map(Option::unwrap_or_default);

        let customer_id =
            CustomerId::new(customer_id).map_err(|e| ConfigError::InvalidVariable {
                name: "CUSTOMER_ID",
                reason: e.to_string(),
            })?;
        let destination = DestinationTableId::new(project_id.to_string(), dataset, table)
            .map_err(|e| ConfigError::InvalidVariable {
                name: match &e {
                    GroupSyncDomainError::InvalidDatasetId(_) => "USER_GROUPS_DATASET",
                    GroupSyncDomainError::InvalidTableId(_) => "USER_GROUPS_TABLE",
                    _ => "SERVICE_ACCOUNT_KEY",
                },
                reason: e.to_string(),
            })?;

        Ok(Some(GroupSyncSettings {
            customer_id,
            destination,
        }))
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidVariable {
                name,
                reason: e.to_string(),
            }),
    }
}
