pub mod gotrue;
pub mod http;
