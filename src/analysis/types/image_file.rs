use std::path::PathBuf;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MediaType, Preview};

/// An image accepted by the upload intake.
///
/// Immutable once created; workflow stages hand the whole value onward
/// instead of mutating it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFile {
    pub id: Uuid,
    /// Where the payload was read from. Analysis runs re-read this path.
    pub source: PathBuf,
    pub payload: Bytes,
    pub preview: Preview,
    pub name: String,
    pub size: u64,
    pub media_type: MediaType,
    pub uploaded_at: DateTime<Utc>,
}

impl ImageFile {
    /// Build an upload record around a payload read from `source`. The
    /// name, size and preview are derived here so every consumer sees the
    /// same view of the upload.
    pub fn new(source: PathBuf, payload: Bytes, media_type: MediaType) -> Self {
        let name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let size = payload.len() as u64;
        let preview = Preview::new(media_type, payload.clone());

        Self {
            id: Uuid::new_v4(),
            source,
            payload,
            preview,
            name,
            size,
            media_type,
            uploaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_name_size_and_preview() {
        let payload = Bytes::from_static(&[0xFF, 0xD8, 0xFF, 0xE0, 0x01]);
        let image = ImageFile::new(
            PathBuf::from("/uploads/mountain_region_1.jpg"),
            payload.clone(),
            MediaType::Jpeg,
        );

        assert_eq!(image.name, "mountain_region_1.jpg");
        assert_eq!(image.size, 5);
        assert_eq!(image.preview.data, payload);
        assert_eq!(image.preview.media_type, MediaType::Jpeg);
    }

    #[test]
    fn test_each_upload_gets_its_own_id() {
        let first = ImageFile::new(
            PathBuf::from("scan.png"),
            Bytes::from_static(b"a"),
            MediaType::Png,
        );
        let second = ImageFile::new(
            PathBuf::from("scan.png"),
            Bytes::from_static(b"a"),
            MediaType::Png,
        );
        assert_ne!(first.id, second.id);
    }
}
