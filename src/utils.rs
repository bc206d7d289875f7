pub fn duration_as_ms_rounded(duration: std::time::Duration) -> f64 {
    (duration.as_nanos() as f64 / 1000.0).round() / 1000.0
}

// check if a file exists
pub fn file_exists(file_path: &str) -> bool {
    std::path::Path::new(file_path).exists()
}
