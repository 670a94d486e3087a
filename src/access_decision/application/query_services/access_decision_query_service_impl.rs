use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    access_decision::domain::{
        model::{
            enums::{
                access_condition::AccessCondition,
                access_decision_domain_error::AccessDecisionDomainError,
                principal_type::PrincipalType,
            },
            queries::check_principal_access_query::CheckPrincipalAccessQuery,
            value_objects::{
                bigquery_resource_name::BigQueryResourceName, session_user::SessionUser,
            },
        },
        services::access_decision_query_service::AccessDecisionQueryService,
    },
    gcp_integration::interfaces::acl::{
        group_directory_facade::GroupDirectoryFacade,
        policy_analyzer_facade::{IamPolicyAnalysisRequest, PolicyAnalyzerFacade},
        scope_resolver_facade::ScopeResolverFacade,
    },
};

pub struct AccessDecisionQueryServiceImpl {
    group_directory: Arc<dyn GroupDirectoryFacade>,
    scope_resolver: Arc<dyn ScopeResolverFacade>,
    policy_analyzer: Arc<dyn PolicyAnalyzerFacade>,
    project_id: String,
}

impl AccessDecisionQueryServiceImpl {
    pub fn new(
        group_directory: Arc<dyn GroupDirectoryFacade>,
        scope_resolver: Arc<dyn ScopeResolverFacade>,
        policy_analyzer: Arc<dyn PolicyAnalyzerFacade>,
        project_id: String,
    ) -> Self {
        Self {
            group_directory,
            scope_resolver,
            policy_analyzer,
            project_id,
        }
    }

    async fn check_group_membership(
        &self,
        group_key: &str,
        session_user: &SessionUser,
    ) -> Result<bool, AccessDecisionDomainError> {
        let group_name = self
            .group_directory
            .lookup_group_name(group_key)
            .await
            .map_err(|e| AccessDecisionDomainError::GroupLookupFailed(e.to_string()))?;

        let members = self
            .group_directory
            .list_memberships(&group_name)
            .await
            .map_err(|e| AccessDecisionDomainError::MembershipListingFailed(e.to_string()))?;

        debug!(
            group_key,
            group = group_name.value(),
            members = members.len(),
            "checking group membership"
        );

        Ok(members
            .iter()
            .any(|member| member.member_key == session_user.value()))
    }

    async fn check_role_or_permission(
        &self,
        condition: AccessCondition,
        query: &CheckPrincipalAccessQuery,
    ) -> Result<bool, AccessDecisionDomainError> {
        let scope = self
            .scope_resolver
            .resolve_organization(&self.project_id)
            .await
            .map_err(|e| AccessDecisionDomainError::ScopeResolutionFailed(e.to_string()))?;

        let resource = BigQueryResourceName::new(&self.project_id, query.dataset(), query.view());
        let (roles, permissions) = match &condition {
            AccessCondition::Role(role) => (vec![role.clone()], Vec::new()),
            AccessCondition::Permission(permission) => (Vec::new(), vec![permission.clone()]),
        };

        let request = IamPolicyAnalysisRequest {
            scope,
            full_resource_name: resource.value().to_string(),
            identity: query.session_user().policy_identity(),
            roles,
            permissions,
        };

        let results = self
            .policy_analyzer
            .analyze_iam_policy(&request)
            .await
            .map_err(|e| AccessDecisionDomainError::PolicyAnalysisFailed(e.to_string()))?;

        debug!(
            kind = condition.kind(),
            condition = condition.value(),
            resource = %resource,
            results,
            "policy analysis completed"
        );

        Ok(results > 0)
    }
}

#[async_trait]
impl AccessDecisionQueryService for AccessDecisionQueryServiceImpl {
    async fn handle_check_principal_access(
        &self,
        query: CheckPrincipalAccessQuery,
    ) -> Result<bool, AccessDecisionDomainError> {
        let principal_type = query.principal().principal_type();
        let principal = query.principal().value().to_string();

        let has_access = match principal_type {
            PrincipalType::Role => {
                self.check_role_or_permission(AccessCondition::Role(principal), &query)
                    .await?
            }
            PrincipalType::Permission => {
                self.check_role_or_permission(AccessCondition::Permission(principal), &query)
                    .await?
            }
            PrincipalType::Group | PrincipalType::Unspecified => {
                self.check_group_membership(&principal, query.session_user())
                    .await?
            }
        };

        info!(
            request_id = query.request_id().unwrap_or("-"),
            session_user = query.session_user().value(),
            principal_type = principal_type.as_str(),
            principal = query.principal().value(),
            has_access,
            "principal access decided"
        );

        Ok(has_access)
    }
}
