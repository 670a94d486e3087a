pub mod group_sync_rest_controller;
