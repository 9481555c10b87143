use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ordesk::config::Config;
use ordesk::middleware::{RequestId, SessionAuth};
use ordesk::modules;
use ordesk::modules::auth::{AuthRepository, AuthService};
use ordesk::modules::orders::{OrderRepository, OrderService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ordesk=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting ordesk order management service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Wire services
    let order_service = Arc::new(OrderService::new(Arc::new(OrderRepository::new(
        db_pool.clone(),
    ))));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(AuthRepository::new(db_pool.clone())),
        config.auth.session_ttl_hours,
    ));

    let bind_address = config.server.bind_address();
    let allowed_origin = config.app.allowed_origin.clone();
    let session_pool = db_pool.clone();

    // Start HTTP server
    let mut server = HttpServer::new(move || {
        let cors = match allowed_origin.as_deref() {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .supports_credentials(),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(web::Data::new(order_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .wrap(SessionAuth::new(session_pool.clone()))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
            .configure(modules::auth::configure)
            .configure(modules::exports::configure)
            .configure(modules::orders::configure)
            .configure(modules::analytics::configure)
    })
    .bind(&bind_address)?;

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    tracing::info!("Server started at http://{}", bind_address);

    server.run().await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ordesk"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Ordesk Order Management",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
