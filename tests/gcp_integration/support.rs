#[path = "support/fake_google_server.rs"]
pub mod fake_google_server;
#[path = "support/fakes.rs"]
pub mod fakes;

pub use fakes::STATIC_TOKEN;
pub use fixtures::{PROJECT_ID, google_error, membership, service_account_key_json};
pub use harness::create_harness;
