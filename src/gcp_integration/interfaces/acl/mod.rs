pub mod access_token_provider;
pub mod group_directory_facade;
pub mod policy_analyzer_facade;
pub mod scope_resolver_facade;
