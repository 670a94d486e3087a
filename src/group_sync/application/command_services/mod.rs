pub mod group_sync_command_service_impl;
