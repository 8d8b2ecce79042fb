//! Typed errors for the core stores.
//!
//! User-input failures abort the operation before any state change and are
//! surfaced as a notice; storage and serialization failures bubble up via
//! `#[from]`. Absent or malformed persisted data is never an error — the
//! stores recover silently with an empty value.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaymarkError {
    /// Rejected user input (empty fields, no location selected).
    #[error("{0}")]
    Validation(String),

    /// Latitude/longitude must be finite numbers.
    #[error("invalid coordinate: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WaymarkError>;

impl WaymarkError {
    /// Convenience constructor for validation failures.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
