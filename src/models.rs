#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub enum ScanStatus {
    Healthy,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Healthy => "Healthy",
        }
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ScanRequest {
    /// Base64 image, optionally as a `data:` URL.
    pub image: String,
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ScanResponse {
    pub status: ScanStatus,
}

impl From<ScanStatus> for ScanResponse {
    fn from(status: ScanStatus) -> Self {
        Self { status }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_scan_response_serializes_literal_status() {
        let response = super::ScanResponse::from(super::ScanStatus::Healthy);
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "Healthy" }));
    }

    #[test]
    fn test_scan_request_ignores_extra_fields() {
        let json = r#"{"image": "aGVsbG8=", "patient": "p-17"}"#;
        let req: super::ScanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.image, "aGVsbG8=");
    }

    #[test]
    fn test_scan_request_requires_image() {
        let result = serde_json::from_str::<super::ScanRequest>(r#"{"picture": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_request_rejects_non_string_image() {
        let result = serde_json::from_str::<super::ScanRequest>(r#"{"image": 42}"#);
        assert!(result.is_err());
    }
}
