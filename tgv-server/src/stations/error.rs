//! Station directory error types.

/// Errors from loading the station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Could not read the directory file.
    #[error("failed to read station file: {0}")]
    Io(#[from] std::io::Error),

    /// The directory file is not valid JSON (or has the wrong shape).
    #[error("invalid station file: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err: StationError = serde_json::from_str::<i32>("not json").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid station file"));
    }
}
