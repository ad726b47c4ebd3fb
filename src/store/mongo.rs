use crate::constants::{COLL_NAME, DB_NAME};
use crate::error::AppError;
use crate::models::user::{Exercise, User};
use crate::store::UserStore;
use crate::structs::user::UserSummary;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_bson, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};

pub struct MongoUserStore {
    client: Client,
}

impl MongoUserStore {
    pub fn new(client: &Client) -> MongoUserStore {
        MongoUserStore {
            client: client.clone(),
        }
    }

    fn collection(&self) -> Collection<User> {
        self.client.database(DB_NAME).collection(COLL_NAME)
    }

    fn document_collection(&self) -> Collection<Document> {
        self.client.database(DB_NAME).collection(COLL_NAME)
    }
}

fn extract_user_summary(doc: &Document) -> UserSummary {
    let id = doc
        .get_object_id("_id")
        .map(|id| id.to_hex())
        .unwrap_or_default();
    let username = doc.get_str("username").unwrap_or_default().to_string();

    UserSummary { id, username }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        self.collection().insert_one(user).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        let mut cursor = self
            .document_collection()
            .find(doc! {})
            .projection(doc! { "_id": 1, "username": 1 })
            .await?;

        let mut users = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            users.push(extract_user_summary(&doc));
        }

        Ok(users)
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let user = self.collection().find_one(doc! { "_id": object_id }).await?;
        Ok(user)
    }

    async fn push_exercise(
        &self,
        id: &str,
        exercise: &Exercise,
    ) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let update = doc! {
            "$push": { "log": to_bson(exercise).map_err(mongodb::error::Error::from)? },
            "$inc": { "count": 1 },
        };

        let user = self
            .collection()
            .find_one_and_update(doc! { "_id": object_id }, update)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(user)
    }
}
