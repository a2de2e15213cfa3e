pub(super) async fn metrics_handler() -> axum::response::Response {
    let metrics = crate::metrics::encode_metrics();

    axum::response::IntoResponse::into_response((
        axum::http::StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    ))
}
