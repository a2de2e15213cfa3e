mod health;
mod metrics;
mod scan;

pub struct AppState {
    pub scanner: std::sync::Arc<dyn crate::scanner::Scanner>,
}

pub(crate) fn json_error<S: Into<String>>(
    status: axum::http::StatusCode,
    message: S,
) -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        status,
        axum::Json(serde_json::json!({ "error": message.into() })),
    )
}

pub fn create_router(
    scanner: std::sync::Arc<dyn crate::scanner::Scanner>,
    max_body_bytes: usize,
) -> axum::Router {
    let state = std::sync::Arc::new(AppState { scanner });

    axum::Router::new()
        .route("/health", axum::routing::get(health::health_check))
        .route("/metrics", axum::routing::get(metrics::metrics_handler))
        .route("/scan", axum::routing::post(scan::scan_image))
        .layer(axum::extract::DefaultBodyLimit::max(max_body_bytes))
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
