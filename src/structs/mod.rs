pub mod api_response;
pub mod exercise;
pub mod user;
