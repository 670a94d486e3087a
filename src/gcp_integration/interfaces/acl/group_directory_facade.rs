use async_trait::async_trait;

use crate::gcp_integration::domain::model::{
    enums::gcp_integration_error::GcpIntegrationError, value_objects::group_name::GroupName,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryGroup {
    pub name: GroupName,
    pub group_key: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupMember {
    pub member_key: String,
}

#[derive(Clone, Debug)]
pub struct GroupMemberships {
    pub group: DirectoryGroup,
    pub members: Vec<GroupMember>,
}

#[async_trait]
pub trait GroupDirectoryFacade: Send + Sync {
    async fn lookup_group_name(&self, group_key: &str) -> Result<GroupName, GcpIntegrationError>;

    async fn list_memberships(
        &self,
        group_name: &GroupName,
    ) -> Result<Vec<GroupMember>, GcpIntegrationError>;

    async fn list_groups(
        &self,
        customer_id: &str,
    ) -> Result<Vec<DirectoryGroup>, GcpIntegrationError>;

    async fn enumerate_group_memberships(
        &self,
        customer_id: &str,
    ) -> Result<Vec<GroupMemberships>, GcpIntegrationError> {
        let groups = self.list_groups(customer_id).await?;
        let mut enumerated = Vec::with_capacity(groups.len());

        for group in groups {
            let members = self.list_memberships(&group.name).await?;
            enumerated.push(GroupMemberships { group, members });
        }

        Ok(enumerated)
    }
}
