pub mod sync_user_groups_command;
