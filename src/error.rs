//! Error types for import, persistence and export.
//!
//! The interaction engine itself never fails: out-of-range geometry is clamped
//! and unknown ids are ignored. Everything that touches bytes or the
//! filesystem returns `Result<T>` with a [`CheatsheetError`].

use thiserror::Error;

/// Errors that can occur while loading, saving or exporting documents
#[derive(Error, Debug)]
pub enum CheatsheetError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image decode or encode failure
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Embedded image data is not valid base64
    #[error("Invalid image data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Image is smaller than the minimum crop rectangle
    #[error("Image too small: {width}x{height} (min {min}x{min})")]
    ImageTooSmall { width: u32, height: u32, min: i32 },

    /// Document file is structurally invalid
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Failed to persist a temp file into its final location
    #[error("Failed to write {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type alias for cheatsheet operations
pub type Result<T> = std::result::Result<T, CheatsheetError>;
