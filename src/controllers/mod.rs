pub mod exercise_controller;
pub mod user_controller;
