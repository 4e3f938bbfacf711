use std::path::Path;

use bytes::Bytes;

use crate::analysis::types::{ImageFile, MediaType};
use crate::config::Configuration;
use crate::error::UploadError;

/// Accepts image uploads for analysis.
///
/// Reads the payload, enforces the size and format gates, and hands back
/// the immutable `ImageFile` the rest of the workflow consumes.
#[derive(Debug, Clone)]
pub struct ImageUploader {
    max_upload_bytes: u64,
}

impl ImageUploader {
    pub fn new(configuration: &Configuration) -> Self {
        Self {
            max_upload_bytes: configuration.max_upload_bytes,
        }
    }

    pub fn with_limit(max_upload_bytes: u64) -> Self {
        Self { max_upload_bytes }
    }

    /// Load one upload from disk.
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<ImageFile, UploadError> {
        let path = path.as_ref().to_path_buf();

        let payload = tokio::fs::read(&path)
            .await
            .map_err(|source| UploadError::ReadError {
                path: path.clone(),
                source,
            })?;

        if payload.is_empty() {
            return Err(UploadError::EmptyUpload(path));
        }

        let size = payload.len() as u64;
        if size > self.max_upload_bytes {
            return Err(UploadError::TooLarge {
                size,
                limit: self.max_upload_bytes,
            });
        }

        let media_type = identify_media_type(&path, &payload)
            .ok_or_else(|| UploadError::UnsupportedMediaType(path.clone()))?;

        let image = ImageFile::new(path, Bytes::from(payload), media_type);
        tracing::info!(
            "Accepted upload {} ({} bytes, {})",
            image.name,
            image.size,
            image.media_type
        );
        Ok(image)
    }
}

/// The payload's magic bytes decide the format. A recognized extension
/// that disagrees with the payload rejects the upload.
fn identify_media_type(path: &Path, payload: &[u8]) -> Option<MediaType> {
    let sniffed = MediaType::sniff(payload)?;
    let by_extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .and_then(MediaType::from_extension);

    match by_extension {
        Some(claimed) if claimed != sniffed => None,
        _ => Some(sniffed),
    }
}
