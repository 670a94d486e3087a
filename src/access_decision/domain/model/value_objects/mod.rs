pub mod bigquery_resource_name;
pub mod principal_spec;
pub mod session_user;
