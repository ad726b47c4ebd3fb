use crate::error::AppError;
use crate::models::user::Exercise;
use crate::services::date_service::{format_date, parse_date, today};
use crate::services::log_service::filter_log;
use crate::store::AppState;
use crate::structs::exercise::{AddExerciseRequest, ExerciseResponse, LogQuery, LogResponse};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use tracing::info;

pub async fn add_exercise(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<AddExerciseRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let request = form.into_inner();

    let duration: i64 = request
        .duration
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidDuration)?;

    // An empty date field behaves like an absent one.
    let date = match request.date.as_deref().filter(|date| !date.is_empty()) {
        Some(date) => parse_date(date)?,
        None => today(),
    };

    let exercise = Exercise {
        description: request.description,
        duration,
        date: format_date(date),
    };

    let user = state
        .store
        .push_exercise(&id, &exercise)
        .await?
        .ok_or_else(|| AppError::UserNotFound(id.clone()))?;

    info!("logged exercise for user {}: {}", id, exercise.description);

    Ok(HttpResponse::Ok().json(ExerciseResponse {
        id,
        username: user.username,
        date: exercise.date,
        duration: exercise.duration,
        description: exercise.description,
    }))
}

pub async fn get_exercise_log(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LogQuery>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let query = query.into_inner();

    let from = parse_window_bound(query.from.as_deref())?;
    let to = parse_window_bound(query.to.as_deref())?;

    let user = state
        .store
        .find_user(&id)
        .await?
        .ok_or_else(|| AppError::UserNotFound(id.clone()))?;

    let log = filter_log(user.log, from, to, query.limit);

    Ok(HttpResponse::Ok().json(LogResponse {
        id,
        username: user.username,
        count: user.count,
        log,
    }))
}

fn parse_window_bound(bound: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match bound.filter(|date| !date.is_empty()) {
        Some(date) => Ok(Some(parse_date(date)?)),
        None => Ok(None),
    }
}
