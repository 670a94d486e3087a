use std::fmt;

use serde::Deserialize;

use crate::gcp_integration::domain::model::enums::gcp_integration_error::GcpIntegrationError;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Deserialize)]
struct RawServiceAccountKey {
    project_id: Option<String>,
    client_email: Option<String>,
    private_key: Option<String>,
    private_key_id: Option<String>,
    token_uri: Option<String>,
}

#[derive(Clone)]
pub struct ServiceAccountKey {
    project_id: String,
    client_email: String,
    private_key: String,
    private_key_id: Option<String>,
    token_uri: String,
}

impl ServiceAccountKey {
    pub fn from_json(raw: &str) -> Result<Self, GcpIntegrationError> {
        let parsed: RawServiceAccountKey = serde_json::from_str(raw)
            .map_err(|e| GcpIntegrationError::InvalidServiceAccountKey(e.to_string()))?;

        Ok(Self {
            project_id: required(parsed.project_id, "project_id")?,
            client_email: required(parsed.client_email, "client_email")?,
            private_key: required(parsed.private_key, "private_key")?,
            private_key_id: parsed.private_key_id.filter(|id| !id.trim().is_empty()),
            token_uri: parsed
                .token_uri
                .filter(|uri| !uri.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }
    pub fn client_email(&self) -> &str {
        &self.client_email
    }
    pub fn private_key_pem(&self) -> &str {
        &self.private_key
    }
    pub fn private_key_id(&self) -> Option<&str> {
        self.private_key_id.as_deref()
    }
    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, GcpIntegrationError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GcpIntegrationError::InvalidServiceAccountKey(format!("{field} is missing")))
}
