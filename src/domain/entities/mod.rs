pub mod credentials;
pub mod token_response;
