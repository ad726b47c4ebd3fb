use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use exercise_tracker_backend::config::cors::configure_cors;
use exercise_tracker_backend::config::database::{connect_to_mongodb, get_server_address};
use exercise_tracker_backend::config::routes::configure_routes;
use exercise_tracker_backend::store::{AppState, MongoUserStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let address = get_server_address();
    let mongodb_client = connect_to_mongodb().await;
    let state = AppState {
        store: Arc::new(MongoUserStore::new(&mongodb_client)),
    };

    info!("Server is running on {}", address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind(address)?
    .run()
    .await
}
