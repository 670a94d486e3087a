pub mod google_api_http_client;
pub mod rest_group_directory_facade_impl;
pub mod rest_policy_analyzer_facade_impl;
pub mod rest_scope_resolver_facade_impl;
pub mod service_account_token_provider_impl;
