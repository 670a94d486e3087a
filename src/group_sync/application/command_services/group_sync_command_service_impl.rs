use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    gcp_integration::interfaces::acl::group_directory_facade::{
        GroupDirectoryFacade, GroupMemberships,
    },
    group_sync::{
        domain::{
            model::{
                commands::sync_user_groups_command::SyncUserGroupsCommand,
                entities::membership_record::MembershipRecord,
                enums::group_sync_domain_error::GroupSyncDomainError,
            },
            services::group_sync_command_service::{
                GroupSyncCommandService, SyncUserGroupsResult,
            },
        },
        infrastructure::persistence::repositories::user_groups_table_repository::UserGroupsTableRepository,
    },
};

pub struct GroupSyncCommandServiceImpl {
    group_directory: Arc<dyn GroupDirectoryFacade>,
    user_groups_table_repository: Arc<dyn UserGroupsTableRepository>,
}

impl GroupSyncCommandServiceImpl {
    pub fn new(
        group_directory: Arc<dyn GroupDirectoryFacade>,
        user_groups_table_repository: Arc<dyn UserGroupsTableRepository>,
    ) -> Self {
        Self {
            group_directory,
            user_groups_table_repository,
        }
    }

    pub fn flatten_memberships(groups: &[GroupMemberships]) -> Vec<MembershipRecord> {
        groups
            .iter()
            .flat_map(|entry| {
                entry.members.iter().map(|member| MembershipRecord {
                    user_email: member.member_key.clone(),
                    user_group: entry.group.group_key.clone(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl GroupSyncCommandService for GroupSyncCommandServiceImpl {
    async fn handle_sync_user_groups(
        &self,
        command: SyncUserGroupsCommand,
    ) -> Result<SyncUserGroupsResult, GroupSyncDomainError> {
        let groups = self
            .group_directory
            .enumerate_group_memberships(command.customer_id().value())
            .await
            .map_err(|e| GroupSyncDomainError::DirectoryEnumerationFailed(e.to_string()))?;

        let records = Self::flatten_memberships(&groups);

        self.user_groups_table_repository
            .replace_all(command.destination(), &records)
            .await?;

        info!(
            run_id = %command.run_id(),
            destination = %command.destination().qualified_name(),
            groups = groups.len(),
            rows = records.len(),
            "user groups table refreshed"
        );

        Ok(SyncUserGroupsResult {
            run_id: command.run_id(),
            groups_scanned: groups.len(),
            rows_written: records.len(),
        })
    }
}
