use crate::error::AppError;
use crate::models::user::User;
use crate::store::AppState;
use crate::structs::user::{CreateUserRequest, UserSummary};
use actix_web::{web, HttpResponse};
use tracing::info;

pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = state.store.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

pub async fn create_user(
    state: web::Data<AppState>,
    form: web::Form<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = User::new(form.into_inner().username);
    state.store.insert_user(&user).await?;

    info!("registered user '{}' with id {}", user.username, user.id);

    Ok(HttpResponse::Ok().json(UserSummary {
        id: user.id.to_hex(),
        username: user.username,
    }))
}
