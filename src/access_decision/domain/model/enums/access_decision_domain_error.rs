use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessDecisionDomainError {
    #[error("request contains no calls")]
    MissingCall,

    #[error("call must carry principal, dataset and view arguments")]
    IncompleteCall,

    #[error("session user is invalid")]
    InvalidSessionUser,

    #[error("group lookup failed: {0}")]
    GroupLookupFailed(String),

    #[error("membership listing failed: {0}")]
    MembershipListingFailed(String),

    #[error("organization scope resolution failed: {0}")]
    ScopeResolutionFailed(String),

    #[error("policy analysis failed: {0}")]
    PolicyAnalysisFailed(String),
}
