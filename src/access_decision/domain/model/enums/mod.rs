pub mod access_condition;
pub mod access_decision_domain_error;
pub mod principal_type;
