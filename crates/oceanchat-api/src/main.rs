use std::env;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use oceanchat_core::config::LayeredConfig;
use oceanchat_core::ChatEngine;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oceanchat_api::routes::create_router;
use oceanchat_api::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oceanchat_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = env::var("OCEANCHAT_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3001);

    let config = LayeredConfig::with_defaults().load_from_env();

    tracing::info!(
        port = port,
        series_window = config.series_window.value,
        seeded = config.seed.value.is_some(),
        "Starting OceanChat API server"
    );

    let engine = match config.seed.value {
        Some(seed) => ChatEngine::seeded(seed, config.series_window.value),
        None => ChatEngine::new(config.series_window.value),
    };

    // No speech sink on the server; chat requests asking for spoken output
    // get a warning field back instead.
    let state = Arc::new(AppState::new(engine, None));

    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = create_router(state).layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for http://localhost:3000");

    axum::serve(listener, app).await.unwrap();
}
