use thiserror::Error;

#[derive(Debug, Error)]
pub enum GcpIntegrationError {
    #[error("invalid service account key: {0}")]
    InvalidServiceAccountKey(String),

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{service} returned {status}: {message}")]
    Upstream {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("{0} unavailable: {1}")]
    Unavailable(&'static str, String),

    #[error("invalid response from {0}: {1}")]
    InvalidResponse(&'static str, String),

    #[error("no organization ancestor found for project {0}")]
    OrganizationNotFound(String),
}
