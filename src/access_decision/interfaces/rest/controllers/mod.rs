pub mod access_decision_rest_controller;
