/// Runtime limits for the analysis core.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Largest payload the upload intake accepts, in bytes.
    pub max_upload_bytes: u64,
    /// Number of processed images the history store keeps before evicting.
    pub history_capacity: usize,
    /// How many records the dashboard's recent-uploads panel shows.
    pub recent_uploads_limit: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            max_upload_bytes: 50 * 1024 * 1024,
            history_capacity: 256,
            recent_uploads_limit: 5,
        }
    }
}

impl Configuration {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_upload_bytes == 0 {
            return Err("Max upload bytes must be greater than 0".to_string());
        }

        if self.history_capacity == 0 {
            return Err("History capacity must be greater than 0".to_string());
        }

        if self.recent_uploads_limit == 0 {
            return Err("Recent uploads limit must be greater than 0".to_string());
        }

        Ok(())
    }
}
