pub mod group_sync_domain_error;
