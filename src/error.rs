use std::path::PathBuf;

use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Upload Error: {0}")]
    UploadError(#[from] UploadError),

    #[error("Analysis Error: {0}")]
    AnalysisError(#[from] AnalysisError),

    #[error("No image is attached to the session")]
    NoImageAttached,

    #[error("Configuration Error: {0}")]
    ConfigurationError(String),
}

/// Errors raised while taking in a new image upload.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Failed to read upload {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Upload {} is empty", .0.display())]
    EmptyUpload(PathBuf),

    #[error("Upload is {size} bytes, over the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error("Unsupported media type for {}; JPEG, PNG and TIFF are accepted", .0.display())]
    UnsupportedMediaType(PathBuf),
}

/// Errors raised by an analysis run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read source image {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
