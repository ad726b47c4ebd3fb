pub mod date_service;
pub mod log_service;
