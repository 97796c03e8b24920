use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger};
use anyhow::Result;

use ems::database::init_database;
use ems::middleware::RequestId;
use ems::{AppState, Config};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("EMS API is running...")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init();

    let config = Config::from_env()?;
    config.validate()?;
    log::info!(
        "Starting EMS API server (environment: {})",
        config.environment
    );

    let pool = init_database(&config.database_url).await?;
    log::info!("Database ready at {}", config.database_url);

    let server_address = config.server_address();
    let frontend_url = config.frontend_url.clone();
    let development = config.is_development();
    let state = AppState::new(pool, config);

    log::info!("Listening on http://{}", server_address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_origin(&frontend_url)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                "Authorization",
                "Content-Type",
                "Accept",
                "X-Requested-With",
                "X-Correlation-ID",
            ])
            .supports_credentials()
            .max_age(3600);
        // The Vite dev server is always allowed while developing
        if development && frontend_url != "http://localhost:5173" {
            cors = cors.allowed_origin("http://localhost:5173");
        }

        let state = state.clone();

        App::new()
            .configure(move |cfg| state.configure(cfg))
            .wrap(cors)
            .wrap(RequestId)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
