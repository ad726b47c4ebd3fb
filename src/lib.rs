pub mod config;
pub mod constants;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod structs;
