use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::gcp_integration::{
    application::acl::google_api_http_client::GoogleApiHttpClient,
    domain::model::{
        enums::gcp_integration_error::GcpIntegrationError, value_objects::group_name::GroupName,
    },
    interfaces::acl::{
        access_token_provider::CLOUD_IDENTITY_GROUPS_SCOPE,
        group_directory_facade::{DirectoryGroup, GroupDirectoryFacade, GroupMember},
    },
};

const SERVICE: &str = "cloud identity";

#[derive(Deserialize)]
struct LookupGroupNameResponse {
    name: Option<String>,
}

#[derive(Deserialize)]
struct EntityKey {
    id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MembershipEntry {
    preferred_member_key: Option<EntityKey>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MembershipsPage {
    #[serde(default)]
    memberships: Vec<MembershipEntry>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupEntry {
    name: String,
    group_key: EntityKey,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupsPage {
    #[serde(default)]
    groups: Vec<GroupEntry>,
    next_page_token: Option<String>,
}

pub struct RestGroupDirectoryFacadeImpl {
    client: Arc<GoogleApiHttpClient>,
    base_url: String,
    page_size: u32,
}

impl RestGroupDirectoryFacadeImpl {
    pub fn new(client: Arc<GoogleApiHttpClient>, base_url: String, page_size: u32) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: page_size.max(1),
        }
    }

    fn page_query(
        &self,
        mut query: Vec<(&'static str, String)>,
        page_token: Option<&str>,
    ) -> Vec<(&'static str, String)> {
        query.push(("pageSize", self.page_size.to_string()));
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }
        query
    }
}

fn next_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

#[async_trait]
impl GroupDirectoryFacade for RestGroupDirectoryFacadeImpl {
    async fn lookup_group_name(&self, group_key: &str) -> Result<GroupName, GcpIntegrationError> {
        let url = format!("{}/v1/groups:lookup", self.base_url);

        let response: LookupGroupNameResponse = self
            .client
            .get_json(
                SERVICE,
                &url,
                &[("groupKey.id", group_key.to_string())],
                &[CLOUD_IDENTITY_GROUPS_SCOPE],
            )
            .await?;

        let name = response.name.ok_or_else(|| {
            GcpIntegrationError::InvalidResponse(SERVICE, "lookup returned no group name".to_string())
        })?;
        GroupName::new(name)
    }

    async fn list_memberships(
        &self,
        group_name: &GroupName,
    ) -> Result<Vec<GroupMember>, GcpIntegrationError> {
        let url = format!("{}/v1/{}/memberships", self.base_url, group_name.value());
        let mut members = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let query = self.page_query(Vec::new(), page_token.as_deref());
            let page: MembershipsPage = self
                .client
                .get_json(SERVICE, &url, &query, &[CLOUD_IDENTITY_GROUPS_SCOPE])
                .await?;

            members.extend(
                page.memberships
                    .into_iter()
                    .filter_map(|m| m.preferred_member_key)
                    .map(|key| GroupMember { member_key: key.id }),
            );

            match next_token(page.next_page_token) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(group = group_name.value(), members = members.len(), "listed memberships");
        Ok(members)
    }

    async fn list_groups(
        &self,
        customer_id: &str,
    ) -> Result<Vec<DirectoryGroup>, GcpIntegrationError> {
        let url = format!("{}/v1/groups", self.base_url);
        let parent = format!("customers/{customer_id}");
        let mut groups = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let query = self.page_query(vec![("parent", parent.clone())], page_token.as_deref());
            let page: GroupsPage = self
                .client
                .get_json(SERVICE, &url, &query, &[CLOUD_IDENTITY_GROUPS_SCOPE])
                .await?;

            for entry in page.groups {
                groups.push(DirectoryGroup {
                    name: GroupName::new(entry.name)?,
                    group_key: entry.group_key.id,
                });
            }

            match next_token(page.next_page_token) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(customer_id, groups = groups.len(), "listed directory groups");
        Ok(groups)
    }
}
