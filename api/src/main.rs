use std::net::SocketAddr;

use axum::middleware::from_fn;
use migration::{Migrator, MigratorTrait};
use tower_http::cors::{Any, CorsLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use util::{config, state::AppState};

use api::auth::middleware::log_request;
use api::routes::routes;

/// Configures a daily-rolling file subscriber, optionally mirrored to
/// stdout. The returned guard must stay alive for the process lifetime.
fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", config::log_file());
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_new(config::log_level()).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file_writer).with_ansi(false));

    if config::log_to_stdout() {
        registry.with(fmt::layer().with_writer(std::io::stdout)).init();
    } else {
        registry.init();
    }

    guard
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let _log_guard = init_logging();

    let db = db::connect().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply database migrations");

    let app_state = AppState::new(db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes(app_state.clone())
        .layer(from_fn(log_request))
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config::host(), config::port())
        .parse()
        .expect("HOST/PORT must form a valid socket address");

    tracing::info!("{} listening on {}", config::project_name(), addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server terminated unexpectedly");
}
