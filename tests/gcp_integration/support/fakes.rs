use std::sync::Mutex;

use async_trait::async_trait;
use masking_policy_functions::gcp_integration::{
    domain::model::{
        enums::gcp_integration_error::GcpIntegrationError, value_objects::access_token::AccessToken,
    },
    interfaces::acl::access_token_provider::AccessTokenProvider,
};

pub const STATIC_TOKEN: &str = "test-access-token";

pub struct StaticAccessTokenProvider {
    requested_scopes: Mutex<Vec<Vec<String>>>,
}

impl StaticAccessTokenProvider {
    pub fn new() -> Self {
        Self {
            requested_scopes: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_scopes(&self) -> Vec<Vec<String>> {
        self.requested_scopes
            .lock()
            .expect("mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticAccessTokenProvider {
    async fn access_token(&self, scopes: &[&str]) -> Result<AccessToken, GcpIntegrationError> {
        self.requested_scopes
            .lock()
            .expect("mutex poisoned")
            .push(scopes.iter().map(|s| s.to_string()).collect());
        Ok(AccessToken::new(STATIC_TOKEN.to_string()))
    }
}
