pub mod access_gate;
pub mod app_error;
pub mod jwt;
pub mod use_cases;
