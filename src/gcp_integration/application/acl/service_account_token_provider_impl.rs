use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::gcp_integration::{
    domain::model::{
        enums::gcp_integration_error::GcpIntegrationError,
        value_objects::{access_token::AccessToken, service_account_key::ServiceAccountKey},
    },
    interfaces::acl::access_token_provider::AccessTokenProvider,
};

const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Serialize)]
struct JwtBearerClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    ASSERTION_LIFETIME_SECS as u64
}

#[derive(Clone)]
struct CachedToken {
    token: AccessToken,
    expires_at: Instant,
}

pub struct ServiceAccountTokenProviderImpl {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    http: Client,
    refresh_margin: Duration,
    cache: RwLock<HashMap<String, CachedToken>>,
}

impl ServiceAccountTokenProviderImpl {
    pub fn new(key: ServiceAccountKey, http: Client) -> Result<Self, GcpIntegrationError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key_pem().as_bytes())
            .map_err(|e| GcpIntegrationError::InvalidServiceAccountKey(e.to_string()))?;

        Ok(Self {
            key,
            encoding_key,
            http,
            refresh_margin: Duration::from_secs(60),
            cache: RwLock::new(HashMap::new()),
        })
    }

    fn cache_key(scopes: &[&str]) -> String {
        let mut sorted = scopes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.join(" ")
    }

    async fn get_cached(&self, cache_key: &str) -> Option<AccessToken> {
        let guard = self.cache.read().await;
        guard.get(cache_key).and_then(|entry| {
            if entry.expires_at > Instant::now() {
                Some(entry.token.clone())
            } else {
                None
            }
        })
    }

    async fn set_cache(&self, cache_key: String, token: AccessToken, lifetime: Duration) {
        let mut guard = self.cache.write().await;
        guard.insert(
            cache_key,
            CachedToken {
                token,
                expires_at: Instant::now() + lifetime.saturating_sub(self.refresh_margin),
            },
        );
    }

    fn signed_assertion(&self, scope: &str) -> Result<String, GcpIntegrationError> {
        let issued_at = Utc::now().timestamp();
        let claims = JwtBearerClaims {
            iss: self.key.client_email(),
            scope,
            aud: self.key.token_uri(),
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id().map(str::to_string);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| GcpIntegrationError::TokenExchange(e.to_string()))
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountTokenProviderImpl {
    async fn access_token(&self, scopes: &[&str]) -> Result<AccessToken, GcpIntegrationError> {
        let cache_key = Self::cache_key(scopes);

        if let Some(cached) = self.get_cached(&cache_key).await {
            return Ok(cached);
        }

        let assertion = self.signed_assertion(&cache_key)?;

        let response = self
            .http
            .post(self.key.token_uri())
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GcpIntegrationError::TokenExchange(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GcpIntegrationError::TokenExchange(format!(
                "{status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| GcpIntegrationError::TokenExchange(e.to_string()))?;

        debug!(
            client_email = self.key.client_email(),
            scopes = %cache_key,
            expires_in = token_response.expires_in,
            "minted service account access token"
        );

        let token = AccessToken::new(token_response.access_token);
        self.set_cache(
            cache_key,
            token.clone(),
            Duration::from_secs(token_response.expires_in),
        )
        .await;

        Ok(token)
    }
}
