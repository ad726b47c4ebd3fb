use crate::controllers::exercise_controller::{add_exercise, get_exercise_log};
use crate::controllers::user_controller::{create_user, list_users};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/users", web::get().to(list_users))
        .route("/api/users", web::post().to(create_user))
        .route(
            "/api/users/{_id}/exercises",
            web::post().to(add_exercise),
        )
        .route("/api/users/{_id}/logs", web::get().to(get_exercise_log));
}
