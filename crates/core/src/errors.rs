use thiserror::Error;

/// Unified error type for the entire stock-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("{symbol} does not exist or has no price data")]
    NoPriceData { symbol: String },

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Store / File ────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("CSV error: {0}")]
    Csv(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        // csv::Error wraps the io::Error for unreadable/unwritable media;
        // surface those as FileIO so callers can tell a bad disk from a bad row.
        if e.is_io_error() {
            match e.into_kind() {
                csv::ErrorKind::Io(io) => CoreError::FileIO(io.to_string()),
                other => CoreError::Csv(format!("{other:?}")),
            }
        } else {
            CoreError::Csv(e.to_string())
        }
    }
}
