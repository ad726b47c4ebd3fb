pub const DB_NAME: &str = "exercise_tracker";
pub const COLL_NAME: &str = "users";
