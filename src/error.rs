//! Error types for the persistence layer.

/// Failure reported by a [`KeyValueStore`](crate::storage::KeyValueStore) backend.
///
/// These never reach the UI: the storage helpers log them and report a
/// boolean or a default value instead.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend is unavailable")]
    Unavailable,
    #[error("storage quota exceeded writing {key} ({needed} bytes, {limit} allowed)")]
    QuotaExceeded { key: String, needed: usize, limit: usize },
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage json error: {0}")]
    Json(#[from] serde_json::Error),
}
