use soletrack_api::{app, config::Config, context::AppContext};

#[tokio::main]
async fn main() {
    soletrack_observability::init();

    let config = Config::from_env();
    let ctx = AppContext::in_memory(&config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app::build_app(ctx, &config.cors_origins))
        .await
        .unwrap();
}
