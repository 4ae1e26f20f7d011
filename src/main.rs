use account_auth::auth::AuthGate;
use account_auth::config::EnvConfig;
use account_auth::db::database_service::DatabaseService;
use account_auth::routes::configure_routes;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let store = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .expect("Failed to initialize user store"),
    );

    let gate = web::Data::new(AuthGate::new(&config, Arc::clone(&store)));

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(gate.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
