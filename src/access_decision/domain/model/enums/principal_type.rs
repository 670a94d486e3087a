#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrincipalType {
    Group,
    Role,
    Permission,
    Unspecified,
}

impl PrincipalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Role => "role",
            Self::Permission => "permission",
            Self::Unspecified => "unspecified",
        }
    }
}

impl From<&str> for PrincipalType {
    fn from(value: &str) -> Self {
        match value {
            "group" => Self::Group,
            "role" => Self::Role,
            "permission" => Self::Permission,
            _ => Self::Unspecified,
        }
    }
}
