const DATA_URL_MARKER: &str = ";base64,";

/// Raw base64 text as received from a client.
#[derive(Debug, Clone)]
pub struct ScanImage {
    encoded: String,
}

impl ScanImage {
    pub fn new(encoded: String) -> Self {
        Self { encoded }
    }

    pub fn encoded_len(&self) -> usize {
        self.encoded.len()
    }

    /// Payload with any `data:<mime>;base64,` prefix removed. Interior
    /// whitespace is left in place.
    pub fn payload(&self) -> &str {
        let trimmed = self.encoded.trim();
        match trimmed.strip_prefix("data:") {
            Some(rest) => match rest.find(DATA_URL_MARKER) {
                Some(idx) => &rest[idx + DATA_URL_MARKER.len()..],
                None => trimmed,
            },
            None => trimmed,
        }
    }

    /// Size in bytes of the decoded image, `None` when the payload is not base64.
    ///
    /// ASCII whitespace is skipped, so MIME-wrapped output is accepted. Padding
    /// is optional but must be consistent when present.
    pub fn decoded_len(&self) -> Option<usize> {
        let mut symbols = 0usize;
        let mut padding = 0usize;

        for byte in self.payload().bytes() {
            match byte {
                b if b.is_ascii_whitespace() => {}
                b'=' => padding += 1,
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' if padding == 0 => {
                    symbols += 1
                }
                _ => return None,
            }
        }

        if padding > 2 || symbols % 4 == 1 {
            return None;
        }
        if padding > 0 && (symbols + padding) % 4 != 0 {
            return None;
        }

        Some(symbols * 3 / 4)
    }
}

pub trait Scanner: Send + Sync {
    fn name(&self) -> &'static str;

    fn scan(&self, image: &ScanImage) -> crate::models::ScanStatus;
}

/// Reports every image as healthy without looking at it.
#[derive(Debug)]
pub struct StubScanner;

impl Scanner for StubScanner {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn scan(&self, _image: &ScanImage) -> crate::models::ScanStatus {
        crate::models::ScanStatus::Healthy
    }
}
