use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use htmlmeta::config::Config;
use htmlmeta::routes::build_router;
use htmlmeta::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "htmlmeta=info,tower_http=info".parse().unwrap());

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("htmlmeta server starting...");

    let config = Config::from_env().expect("Failed to load configuration");
    info!(
        max_document_bytes = config.max_document_bytes,
        "Configuration loaded"
    );

    let cors = if config.is_dev {
        info!("CORS: permissive (dev mode)");
        CorsLayer::permissive()
    } else {
        info!("CORS: restrictive (production mode)");
        CorsLayer::new()
    };

    let addr = config.server_addr();
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = build_router(AppState::from(&config))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
        .layer(cors);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
