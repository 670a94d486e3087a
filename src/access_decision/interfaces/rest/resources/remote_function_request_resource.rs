use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFunctionRequestResource {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub caller: Option<String>,
    #[validate(length(min = 1))]
    pub session_user: String,
    #[serde(default)]
    pub user_defined_context: Option<HashMap<String, String>>,
    #[validate(length(min = 1))]
    pub calls: Vec<Vec<String>>,
}
