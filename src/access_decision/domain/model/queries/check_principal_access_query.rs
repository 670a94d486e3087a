use crate::access_decision::domain::model::{
    enums::access_decision_domain_error::AccessDecisionDomainError,
    value_objects::{principal_spec::PrincipalSpec, session_user::SessionUser},
};

#[derive(Clone, Debug)]
pub struct CheckPrincipalAccessQuery {
    session_user: SessionUser,
    principal: PrincipalSpec,
    dataset: String,
    view: String,
    request_id: Option<String>,
}

pub struct CheckPrincipalAccessQueryParts {
    pub session_user: String,
    pub principal_spec: String,
    pub dataset: String,
    pub view: String,
    pub request_id: Option<String>,
}

impl CheckPrincipalAccessQuery {
    pub fn new(parts: CheckPrincipalAccessQueryParts) -> Result<Self, AccessDecisionDomainError> {
        Ok(Self {
            session_user: SessionUser::new(parts.session_user)?,
            principal: PrincipalSpec::parse(&parts.principal_spec),
            dataset: parts.dataset,
            view: parts.view,
            request_id: parts.request_id,
        })
    }

    pub fn from_first_call(
        session_user: String,
        calls: &[Vec<String>],
        request_id: Option<String>,
    ) -> Result<Self, AccessDecisionDomainError> {
        let call = calls.first().ok_or(AccessDecisionDomainError::MissingCall)?;
        let (principal_spec, dataset, view) = match call.as_slice() {
            [principal_spec, dataset, view, ..] => (principal_spec, dataset, view),
            _ => return Err(AccessDecisionDomainError::IncompleteCall),
        };

        Self::new(CheckPrincipalAccessQueryParts {
            session_user,
            principal_spec: principal_spec.clone(),
            dataset: dataset.clone(),
            view: view.clone(),
            request_id,
        })
    }

    pub fn session_user(&self) -> &SessionUser {
        &self.session_user
    }
    pub fn principal(&self) -> &PrincipalSpec {
        &self.principal
    }
    pub fn dataset(&self) -> &str {
        &self.dataset
    }
    pub fn view(&self) -> &str {
        &self.view
    }
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}
