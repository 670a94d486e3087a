pub mod access_decision;
pub mod config;
pub mod gcp_integration;
pub mod group_sync;
