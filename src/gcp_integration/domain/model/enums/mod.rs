pub mod gcp_integration_error;
