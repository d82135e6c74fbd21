use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_site::{
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::new();
    init_tracing(config.as_ref().map(|cfg| cfg.log_json).unwrap_or(false));

    let config = match config {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(&config));

    if let Err(e) = app_state.project_handler.initialize(config.seed_sample_data).await {
        tracing::error!("Failed to initialize database at {}: {}", config.database_path, e);
        std::process::exit(1);
    }

    let server_addr = config.server_addr();

    tracing::info!(
        "🚀 Starting {} v{} on {} (env: {})",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        config.env
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
