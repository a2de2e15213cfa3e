pub(super) async fn scan_image(
    axum::extract::State(state): axum::extract::State<std::sync::Arc<crate::api::AppState>>,
    payload: Result<axum::Json<serde_json::Value>, axum::extract::rejection::JsonRejection>,
) -> axum::response::Response {
    let mut body = match payload {
        Ok(axum::Json(body)) => body,
        Err(rejection) => {
            let status = match rejection.status() {
                axum::http::StatusCode::PAYLOAD_TOO_LARGE => {
                    axum::http::StatusCode::PAYLOAD_TOO_LARGE
                }
                _ => axum::http::StatusCode::BAD_REQUEST,
            };
            tracing::warn!("Rejected scan request: {}", rejection.body_text());

            return axum::response::IntoResponse::into_response(crate::api::json_error(
                status,
                rejection.body_text(),
            ));
        }
    };

    // Repeated keys collapse to the last value when parsed into a map.
    let encoded = match body.get_mut("image").map(serde_json::Value::take) {
        Some(serde_json::Value::String(image)) => image,
        Some(_) => {
            return axum::response::IntoResponse::into_response(crate::api::json_error(
                axum::http::StatusCode::BAD_REQUEST,
                "Field 'image' must be a base64 string",
            ));
        }
        None => {
            return axum::response::IntoResponse::into_response(crate::api::json_error(
                axum::http::StatusCode::BAD_REQUEST,
                "Missing required field 'image'",
            ));
        }
    };

    let scan_id = uuid::Uuid::new_v4();
    let image = crate::scanner::ScanImage::new(encoded);
    let decoded_len = image.decoded_len();

    let status = state.scanner.scan(&image);
    crate::metrics::record_scan(status, decoded_len);

    match decoded_len {
        Some(bytes) => tracing::info!(
            "Scan {} completed by {} scanner: status={}, image_bytes={}",
            scan_id,
            state.scanner.name(),
            status,
            bytes
        ),
        None => tracing::info!(
            "Scan {} completed by {} scanner: status={}, image not valid base64 ({} chars)",
            scan_id,
            state.scanner.name(),
            status,
            image.encoded_len()
        ),
    }

    axum::response::IntoResponse::into_response(axum::Json(
        crate::models::ScanResponse::from(status),
    ))
}
