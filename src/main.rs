use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tax_engine::config::Config;
use tax_engine::taxes::controllers::{configure_tax_routes, cors_headers};
use tax_engine::taxes::RateTable;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tax_engine=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Tax Engine");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Rate table is read-only after this point and shared across workers
    let rate_table = web::Data::new(RateTable::default());
    tracing::info!("Rate table loaded ({} rules)", rate_table.len());

    // Start HTTP server; a failure to bind is fatal
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(rate_table.clone())
            .wrap(TracingLogger::default())
            .wrap(cors_headers())
            .configure(configure_tax_routes)
    })
    .bind(&bind_address)
    .map_err(|err| {
        tracing::error!("Failed to bind {}: {}", bind_address, err);
        err
    })?
    .run();

    tracing::info!("Tax Engine running on http://{}", bind_address);

    server.await
}
