use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RemoteFunctionReplyResource {
    pub replies: Vec<String>,
}
