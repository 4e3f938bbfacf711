use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DetectedFeature;

/// Severity classification for an analyzed area.
///
/// The derived ordering follows declaration order, so comparisons like
/// `risk >= RiskLevel::High` read as severity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low = 0,
    Medium = 1,
    High = 2,
    Critical = 3,
}

impl RiskLevel {
    /// The closed set, least to most severe.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Position in the severity order, 0 for low.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance attached to every analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub algorithm: String,
    /// Reported processing duration. Independent of wall-clock latency.
    pub processing_time_ms: u64,
    pub resolution: String,
}

/// The outcome of one analysis run over a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub risk_level: RiskLevel,
    /// Overall confidence percentage in [0, 100].
    pub confidence: f64,
    /// Share of the image surface assessed as affected, in [0, 100].
    pub affected_area_percentage: f64,
    pub detected_features: Vec<DetectedFeature>,
    pub timestamp: DateTime<Utc>,
    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    pub fn feature_count(&self) -> usize {
        self.detected_features.len()
    }
}
