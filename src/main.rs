use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use netcost::config::{init_tracing, Config};
use netcost::middleware::{ErrorHandler, RequestId};
use netcost::modules::configure_routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing
    init_tracing(
        &config.default_log_filter(),
        config.app.log_format,
        std::io::stdout,
    );

    tracing::info!("Starting net cost calculator");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(|| {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!(
        "Server started at http://{} ({} workers)",
        bind_address,
        config.server.workers
    );

    server.await.context("Server terminated with an error")
}
