pub mod access_token;
pub mod group_name;
pub mod organization_scope;
pub mod service_account_key;
