use async_trait::async_trait;

use crate::group_sync::domain::model::{
    entities::membership_record::MembershipRecord,
    enums::group_sync_domain_error::GroupSyncDomainError,
    value_objects::destination_table_id::DestinationTableId,
};

#[async_trait]
pub trait UserGroupsTableRepository: Send + Sync {
    async fn replace_all(
        &self,
        destination: &DestinationTableId,
        records: &[MembershipRecord],
    ) -> Result<(), GroupSyncDomainError>;
}
