use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroupSyncDomainError {
    #[error("customer id is invalid")]
    InvalidCustomerId,

    #[error("destination table is invalid: {0}")]
    InvalidDestinationTable(String),

    #[error("invalid dataset id '{0}'")]
    InvalidDatasetId(String),

    #[error("invalid table id '{0}'")]
    InvalidTableId(String),

    #[error("directory enumeration failed: {0}")]
    DirectoryEnumerationFailed(String),

    #[error("membership table write failed: {0}")]
    TableWriteFailed(String),
}
