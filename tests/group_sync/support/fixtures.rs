use masking_policy_functions::{
    config::app_config::GroupSyncSettings,
    group_sync::domain::model::{
        commands::sync_user_groups_command::SyncUserGroupsCommand,
        entities::membership_record::MembershipRecord,
        value_objects::{customer_id::CustomerId, destination_table_id::DestinationTableId},
    },
};

pub const CUSTOMER_ID: &str = "C01abcd";

pub fn sync_settings() -> GroupSyncSettings {
    GroupSyncSettings {
        customer_id: CustomerId::new(CUSTOMER_ID.to_string()).expect("valid customer id"),
        destination: DestinationTableId::new(
            "analytics-prod".to_string(),
            "security".to_string(),
            "user_groups".to_string(),
        )
        .expect("valid destination"),
    }
}

pub fn sync_command() -> SyncUserGroupsCommand {
    let settings = sync_settings();
    SyncUserGroupsCommand::new(settings.customer_id, settings.destination)
}

pub fn membership(user_email: &str, user_group: &str) -> MembershipRecord {
    MembershipRecord {
        user_email: user_email.to_string(),
        user_group: user_group.to_string(),
    }
}
