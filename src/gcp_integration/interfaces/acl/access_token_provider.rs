use async_trait::async_trait;

use crate::gcp_integration::domain::model::{
    enums::gcp_integration_error::GcpIntegrationError, value_objects::access_token::AccessToken,
};

pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
pub const CLOUD_IDENTITY_GROUPS_SCOPE: &str =
    "https://www.googleapis.com/auth/cloud-identity.groups.readonly";
pub const BIGQUERY_SCOPE: &str = "https://www.googleapis.com/auth/bigquery";

#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self, scopes: &[&str]) -> Result<AccessToken, GcpIntegrationError>;
}
