pub mod access_decision_error_response_resource;
pub mod remote_function_reply_resource;
pub mod remote_function_request_resource;
