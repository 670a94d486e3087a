#[path = "support/fixtures.rs"]
pub mod fixtures;
#[path = "support/harness.rs"]
mod harness;

pub use fixtures::{
    ORGANIZATION_ID, PROJECT_ID, SESSION_USER, check_query, check_query_as, remote_function_request,
};
pub use harness::{AccessDecisionHarness, create_harness};
