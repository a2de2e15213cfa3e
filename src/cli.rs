pub fn encode_image_file(path: &std::path::Path) -> crate::error::CliResult<String> {
    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(crate::error::CliError::EmptyImage(
            path.display().to_string(),
        ));
    }

    Ok(base64::Engine::encode(
        &base64::engine::general_purpose::STANDARD,
        bytes,
    ))
}

pub struct CliClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn scan(&self, image: String) -> crate::error::CliResult<crate::models::ScanResponse> {
        let url = format!("{}/scan", self.base_url);
        let request = crate::models::ScanRequest { image };

        let response = self.client.post(&url).json(&request).send()?;

        if response.status().is_success() {
            Ok(response.json::<crate::models::ScanResponse>()?)
        } else {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);

            Err(crate::error::CliError::HttpError(format!(
                "{}: {}",
                status, message
            )))
        }
    }

    pub fn scan_file(
        &self,
        path: &std::path::Path,
    ) -> crate::error::CliResult<crate::models::ScanResponse> {
        let image = encode_image_file(path)?;
        self.scan(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xray.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]).unwrap();

        let encoded = encode_image_file(&path).unwrap();
        assert_eq!(encoded, "iVBORw0KGgo=");
    }

    #[test]
    fn test_encode_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, []).unwrap();

        let result = encode_image_file(&path);
        assert!(matches!(result, Err(crate::error::CliError::EmptyImage(_))));
    }

    #[test]
    fn test_encode_missing_file() {
        let result = encode_image_file(std::path::Path::new("/nonexistent/scan.png"));
        assert!(matches!(result, Err(crate::error::CliError::IoError(_))));
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CliClient::new("http://localhost:5001/");
        assert_eq!(client.base_url, "http://localhost:5001");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_scan_file_against_server() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = crate::api::create_router(
            std::sync::Arc::new(crate::scanner::StubScanner),
            1024 * 1024,
        );
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.jpg");
        std::fs::write(&path, [0xff, 0xd8, 0xff, 0xe0]).unwrap();

        let response = tokio::task::spawn_blocking(move || {
            CliClient::new(&format!("http://{}", addr)).scan_file(&path)
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(response.status, crate::models::ScanStatus::Healthy);
        server.abort();
    }
}
