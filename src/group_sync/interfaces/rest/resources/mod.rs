pub mod group_sync_error_response_resource;
pub mod sync_user_groups_response_resource;
