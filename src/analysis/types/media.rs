use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Image formats accepted by the upload intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Jpeg,
    Png,
    Tiff,
}

impl MediaType {
    pub const ALL: [MediaType; 3] = [MediaType::Jpeg, MediaType::Png, MediaType::Tiff];

    pub fn as_mime(&self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::Tiff => "image/tiff",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(MediaType::Jpeg),
            "png" => Some(MediaType::Png),
            "tif" | "tiff" => Some(MediaType::Tiff),
            _ => None,
        }
    }

    /// Identify the format from the payload's leading magic bytes.
    pub fn sniff(payload: &[u8]) -> Option<Self> {
        if payload.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(MediaType::Jpeg)
        } else if payload.starts_with(&[0x89, b'P', b'N', b'G']) {
            Some(MediaType::Png)
        } else if payload.starts_with(b"II*\0") || payload.starts_with(b"MM\0*") {
            Some(MediaType::Tiff)
        } else {
            None
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_mime())
    }
}

/// Renderable copy of an image payload, kept alongside the upload so
/// display surfaces never have to touch the filesystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub media_type: MediaType,
    pub data: Bytes,
}

impl Preview {
    pub fn new(media_type: MediaType, data: Bytes) -> Self {
        Self { media_type, data }
    }

    /// Encode as a `data:` URI for web-facing consumers.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type.as_mime(),
            BASE64.encode(&self.data)
        )
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_identifies_the_three_supported_formats() {
        assert_eq!(
            MediaType::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(MediaType::Jpeg)
        );
        assert_eq!(
            MediaType::sniff(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]),
            Some(MediaType::Png)
        );
        assert_eq!(MediaType::sniff(b"II*\0rest"), Some(MediaType::Tiff));
        assert_eq!(MediaType::sniff(b"MM\0*rest"), Some(MediaType::Tiff));
        assert_eq!(MediaType::sniff(b"plain text"), None);
        assert_eq!(MediaType::sniff(&[]), None);
    }

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        assert_eq!(MediaType::from_extension("JPG"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_extension("jpeg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_extension("Png"), Some(MediaType::Png));
        assert_eq!(MediaType::from_extension("tiff"), Some(MediaType::Tiff));
        assert_eq!(MediaType::from_extension("gif"), None);
    }

    #[test]
    fn test_data_uri_carries_mime_and_base64_payload() {
        let preview = Preview::new(MediaType::Png, Bytes::from_static(b"abc"));
        assert_eq!(preview.data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_empty_preview_still_renders_a_uri() {
        let preview = Preview::new(MediaType::Jpeg, Bytes::new());
        assert!(preview.is_empty());
        assert_eq!(preview.data_uri(), "data:image/jpeg;base64,");
    }
}
