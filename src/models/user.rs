use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One logged activity, embedded in the owning user's `log` array.
/// The date is stored as the display string (e.g. "Mon Jan 01 2024"),
/// never as a timestamp.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Exercise {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub log: Vec<Exercise>,
}

impl User {
    pub fn new(username: String) -> User {
        User {
            id: ObjectId::new(),
            username,
            count: 0,
            log: Vec::new(),
        }
    }
}
