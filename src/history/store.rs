use chrono::{DateTime, Utc};

use crate::analysis::types::{ProcessedImage, RiskLevel};

/// Optional gates applied when listing stored records.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    risk_at_least: Option<RiskLevel>,
    uploaded_after: Option<DateTime<Utc>>,
    uploaded_before: Option<DateTime<Utc>>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn risk_at_least(mut self, risk: RiskLevel) -> Self {
        self.risk_at_least = Some(risk);
        self
    }

    pub fn uploaded_after(mut self, at: DateTime<Utc>) -> Self {
        self.uploaded_after = Some(at);
        self
    }

    pub fn uploaded_before(mut self, at: DateTime<Utc>) -> Self {
        self.uploaded_before = Some(at);
        self
    }

    fn matches(&self, record: &ProcessedImage) -> bool {
        if let Some(minimum) = self.risk_at_least {
            if record.analysis.risk_level < minimum {
                return false;
            }
        }
        if let Some(after) = self.uploaded_after {
            if record.image.uploaded_at < after {
                return false;
            }
        }
        if let Some(before) = self.uploaded_before {
            if record.image.uploaded_at > before {
                return false;
            }
        }
        true
    }
}

/// In-memory history of processed images.
///
/// Capped at a fixed capacity; once full, recording a new image evicts the
/// oldest one.
pub struct HistoryStore {
    records: Vec<ProcessedImage>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity.min(1000)),
            capacity,
        }
    }

    pub fn record(&mut self, image: ProcessedImage) {
        tracing::debug!("Recording {} in the history store", image.name());
        self.records.push(image);
        if self.records.len() > self.capacity {
            self.records.remove(0);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessedImage> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The newest records by upload time, for the dashboard panel.
    pub fn recent(&self, limit: usize) -> Vec<&ProcessedImage> {
        let mut records: Vec<&ProcessedImage> = self.records.iter().collect();
        records.sort_by(|a, b| b.image.uploaded_at.cmp(&a.image.uploaded_at));
        records.truncate(limit);
        records
    }

    /// Case-insensitive substring search over file names.
    pub fn search(&self, query: &str) -> Vec<&ProcessedImage> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn filter(&self, filter: &RecordFilter) -> Vec<&ProcessedImage> {
        self.records
            .iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    /// Serialize the full history for the export surface.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }
}
