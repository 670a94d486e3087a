use std::sync::Arc;

use masking_policy_functions::access_decision::{
    application::query_services::access_decision_query_service_impl::AccessDecisionQueryServiceImpl,
    interfaces::rest::controllers::access_decision_rest_controller::AccessDecisionRestControllerState,
};

use super::{
    fakes::{FakeGroupDirectoryFacade, FakePolicyAnalyzerFacade, FakeScopeResolverFacade},
    fixtures::{ORGANIZATION_ID, PROJECT_ID},
};

pub struct AccessDecisionHarness {
    pub group_directory: Arc<FakeGroupDirectoryFacade>,
    pub scope_resolver: Arc<FakeScopeResolverFacade>,
    pub policy_analyzer: Arc<FakePolicyAnalyzerFacade>,
    pub service: Arc<AccessDecisionQueryServiceImpl>,
}

impl AccessDecisionHarness {
    pub fn controller_state(&self) -> AccessDecisionRestControllerState {
        AccessDecisionRestControllerState {
            query_service: self.service.clone(),
        }
    }
}

pub fn create_harness() -> AccessDecisionHarness {
    let group_directory = Arc::new(FakeGroupDirectoryFacade::new());
    let scope_resolver = Arc::new(FakeScopeResolverFacade::new(ORGANIZATION_ID));
    let policy_analyzer = Arc::new(FakePolicyAnalyzerFacade::new());

    let service = Arc::new(AccessDecisionQueryServiceImpl::new(
        group_directory.clone(),
        scope_resolver.clone(),
        policy_analyzer.clone(),
        PROJECT_ID.to_string(),
    ));

    AccessDecisionHarness {
        group_directory,
        scope_resolver,
        policy_analyzer,
        service,
    }
}
