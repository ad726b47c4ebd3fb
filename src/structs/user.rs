use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// Projected view used by the listing and creation responses; the
/// activity log and counter are deliberately never part of this shape.
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}
