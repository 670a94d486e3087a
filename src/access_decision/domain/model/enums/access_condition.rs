#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessCondition {
    Role(String),
    Permission(String),
}

impl AccessCondition {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Role(_) => "role",
            Self::Permission(_) => "permission",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Role(value) | Self::Permission(value) => value,
        }
    }
}
