use crate::access_decision::domain::model::enums::principal_type::PrincipalType;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PrincipalSpec {
    Qualified { principal_type: String, value: String },
    Unqualified { value: String },
}

impl PrincipalSpec {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((principal_type, value)) => Self::Qualified {
                principal_type: principal_type.to_string(),
                value: value.to_string(),
            },
            None => Self::Unqualified {
                value: raw.to_string(),
            },
        }
    }

    pub fn principal_type(&self) -> PrincipalType {
        match self {
            Self::Qualified { principal_type, .. } => PrincipalType::from(principal_type.as_str()),
            Self::Unqualified { .. } => PrincipalType::Unspecified,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Qualified { value, .. } | Self::Unqualified { value } => value,
        }
    }
}
