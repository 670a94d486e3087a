use async_trait::async_trait;
use uuid::Uuid;

use crate::group_sync::domain::model::{
    commands::sync_user_groups_command::SyncUserGroupsCommand,
    enums::group_sync_domain_error::GroupSyncDomainError,
};

#[derive(Clone, Debug)]
pub struct SyncUserGroupsResult {
    pub run_id: Uuid,
    pub groups_scanned: usize,
    pub rows_written: usize,
}

#[async_trait]
pub trait GroupSyncCommandService: Send + Sync {
    async fn handle_sync_user_groups(
        &self,
        command: SyncUserGroupsCommand,
    ) -> Result<SyncUserGroupsResult, GroupSyncDomainError>;
}
