pub mod memory;
pub mod mongo;

use crate::error::AppError;
use crate::models::user::{Exercise, User};
use crate::structs::user::UserSummary;
use async_trait::async_trait;
use std::sync::Arc;

pub use memory::MemoryUserStore;
pub use mongo::MongoUserStore;

/// Persistence port for user documents. The production implementation is
/// Mongo-backed; handler tests run against [`MemoryUserStore`].
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: &User) -> Result<(), AppError>;

    /// Every user, projected down to `{_id, username}`.
    async fn list_users(&self) -> Result<Vec<UserSummary>, AppError>;

    async fn find_user(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Appends the exercise and increments the counter in one atomic
    /// update, returning the updated user. `None` means no such user.
    async fn push_exercise(&self, id: &str, exercise: &Exercise)
        -> Result<Option<User>, AppError>;
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}
