use crate::error::AppError;
use crate::models::user::{Exercise, User};
use crate::store::UserStore;
use crate::structs::user::UserSummary;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process store backing the handler tests. Keyed by the hex form of
/// the user's ObjectId; insertion order is preserved for listings.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<String>>,
    by_id: Mutex<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> MemoryUserStore {
        MemoryUserStore::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        let key = user.id.to_hex();
        self.users.lock().unwrap().push(key.clone());
        self.by_id.lock().unwrap().insert(key, user.clone());
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        let order = self.users.lock().unwrap();
        let by_id = self.by_id.lock().unwrap();

        Ok(order
            .iter()
            .filter_map(|key| by_id.get(key))
            .map(|user| UserSummary {
                id: user.id.to_hex(),
                username: user.username.clone(),
            })
            .collect())
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.by_id.lock().unwrap().get(id).cloned())
    }

    async fn push_exercise(
        &self,
        id: &str,
        exercise: &Exercise,
    ) -> Result<Option<User>, AppError> {
        let mut by_id = self.by_id.lock().unwrap();

        match by_id.get_mut(id) {
            Some(user) => {
                user.log.push(exercise.clone());
                user.count += 1;
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}
