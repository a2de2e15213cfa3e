pub static SCANS_TOTAL: std::sync::LazyLock<prometheus::IntCounterVec> =
    std::sync::LazyLock::new(|| {
        prometheus::register_int_counter_vec!(
            "medscan_scans_total",
            "Total number of scans by reported status",
            &["status"]
        )
        .unwrap()
    });

pub static SCAN_IMAGE_BYTES: std::sync::LazyLock<prometheus::Histogram> =
    std::sync::LazyLock::new(|| {
        prometheus::register_histogram!(
            "medscan_scan_image_bytes",
            "Decoded size of scanned images in bytes",
            prometheus::exponential_buckets(1024.0, 4.0, 8).unwrap()
        )
        .unwrap()
    });

pub static UNDECODABLE_IMAGES_TOTAL: std::sync::LazyLock<prometheus::IntCounter> =
    std::sync::LazyLock::new(|| {
        prometheus::register_int_counter!(
            "medscan_undecodable_images_total",
            "Number of scanned images whose payload was not valid base64"
        )
        .unwrap()
    });

pub fn record_scan(status: crate::models::ScanStatus, decoded_len: Option<usize>) {
    SCANS_TOTAL.with_label_values(&[status.as_str()]).inc();

    match decoded_len {
        Some(len) => SCAN_IMAGE_BYTES.observe(len as f64),
        None => UNDECODABLE_IMAGES_TOTAL.inc(),
    }
}

pub fn encode_metrics() -> String {
    let encoder = prometheus::TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = prometheus::Encoder::encode(&encoder, &metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }

    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_scan_counts_by_status() {
        let before = SCANS_TOTAL.with_label_values(&["Healthy"]).get();
        record_scan(crate::models::ScanStatus::Healthy, Some(2048));
        let after = SCANS_TOTAL.with_label_values(&["Healthy"]).get();
        assert!(after > before);
    }

    #[test]
    fn test_record_scan_undecodable() {
        let before = UNDECODABLE_IMAGES_TOTAL.get();
        record_scan(crate::models::ScanStatus::Healthy, None);
        assert!(UNDECODABLE_IMAGES_TOTAL.get() > before);
    }

    #[test]
    fn test_encode_metrics() {
        record_scan(crate::models::ScanStatus::Healthy, Some(10));
        let output = encode_metrics();
        assert!(output.contains("# HELP medscan_scans_total"));
        assert!(output.contains("medscan_scan_image_bytes_bucket"));
    }
}
