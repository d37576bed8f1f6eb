use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpServer};
use reclaim::config::EnvConfig;
use reclaim::db::postgres_service::PostgresService;
use reclaim::middleware::gate::access_gate;
use reclaim::middleware::headers::{security_headers, SecurityHeaders};
use reclaim::notify::ClaimNotifier;
use reclaim::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let notifier = ClaimNotifier::new(64);
    let headers = SecurityHeaders::from_config(&config);
    let gate = config.gate.clone();

    let _ = reclaim::config::CONFIG.set(config);

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        let gate = gate.clone();
        let headers = headers.clone();

        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(notifier.clone()))
            .configure(configure_routes)
            .wrap(from_fn(move |req, next| {
                access_gate(gate.clone(), req, next)
            }))
            // registered last so every response, including gate
            // rejections, carries the hardening headers
            .wrap(from_fn(move |req, next| {
                security_headers(headers.clone(), req, next)
            }))
    })
    .bind(addr)?
    .run()
    .await
}
