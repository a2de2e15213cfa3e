pub(super) async fn health_check(
    axum::extract::State(state): axum::extract::State<std::sync::Arc<crate::api::AppState>>,
) -> impl axum::response::IntoResponse {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "scanner": state.scanner.name(),
    }))
}
