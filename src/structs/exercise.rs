use crate::models::user::Exercise;
use serde::{Deserialize, Serialize};

/// Form body for exercise creation. `duration` arrives as text and is
/// parsed by the handler so a non-numeric value can be rejected up front.
#[derive(Deserialize)]
pub struct AddExerciseRequest {
    pub description: String,
    pub duration: String,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub date: String,
    pub duration: i64,
    pub description: String,
}

#[derive(Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub count: i64,
    pub log: Vec<Exercise>,
}
