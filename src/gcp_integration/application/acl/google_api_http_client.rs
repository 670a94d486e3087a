use std::sync::Arc;

use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::gcp_integration::{
    domain::model::enums::gcp_integration_error::GcpIntegrationError,
    interfaces::acl::access_token_provider::AccessTokenProvider,
};

#[derive(Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Deserialize)]
struct GoogleErrorBody {
    #[serde(default)]
    message: String,
}

pub struct GoogleApiHttpClient {
    http: Client,
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl GoogleApiHttpClient {
    pub fn new(http: Client, token_provider: Arc<dyn AccessTokenProvider>) -> Self {
        Self {
            http,
            token_provider,
        }
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub async fn authorize(
        &self,
        request: RequestBuilder,
        scopes: &[&str],
    ) -> Result<RequestBuilder, GcpIntegrationError> {
        let token = self.token_provider.access_token(scopes).await?;
        Ok(request.bearer_auth(token.secret()))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: &str,
        query: &[(&str, String)],
        scopes: &[&str],
    ) -> Result<T, GcpIntegrationError> {
        let request = self.authorize(self.http.get(url).query(query), scopes).await?;
        self.execute(service, request).await
    }

    pub async fn post_json<B, T>(
        &self,
        service: &'static str,
        url: &str,
        body: &B,
        scopes: &[&str],
    ) -> Result<T, GcpIntegrationError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.authorize(self.http.post(url).json(body), scopes).await?;
        self.execute(service, request).await
    }

    pub async fn execute<T: DeserializeOwned>(
        &self,
        service: &'static str,
        request: RequestBuilder,
    ) -> Result<T, GcpIntegrationError> {
        let response = request
            .send()
            .await
            .map_err(|e| GcpIntegrationError::Unavailable(service, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GcpIntegrationError::Unavailable(service, e.to_string()))?;

        if !status.is_success() {
            return Err(upstream_error(service, status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| GcpIntegrationError::InvalidResponse(service, e.to_string()))
    }
}

pub fn upstream_error(service: &'static str, status: u16, body: &str) -> GcpIntegrationError {
    let message = serde_json::from_str::<GoogleErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.chars().take(200).collect());

    if status == 404 {
        GcpIntegrationError::NotFound(message)
    } else {
        GcpIntegrationError::Upstream {
            service,
            status,
            message,
        }
    }
}
