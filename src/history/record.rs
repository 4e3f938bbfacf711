use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::types::{AnalysisResult, ProcessedImage};

/// Risk and affected-area movement between two analysis runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Severity-rank delta, newest minus oldest. One step per risk level.
    pub risk_change: i8,
    /// Affected-area delta in percentage points, newest minus oldest.
    pub area_change: f64,
}

impl TrendSummary {
    pub fn between(oldest: &AnalysisResult, newest: &AnalysisResult) -> Self {
        Self {
            risk_change: newest.risk_level.rank() as i8 - oldest.risk_level.rank() as i8,
            area_change: newest.affected_area_percentage - oldest.affected_area_percentage,
        }
    }

    pub fn is_worsening(&self) -> bool {
        self.risk_change > 0 || (self.risk_change == 0 && self.area_change > 0.0)
    }
}

/// Every recorded run for one monitored location, oldest first, plus the
/// movement between the endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub id: Uuid,
    pub location: String,
    /// Timestamp of the newest run in the record.
    pub date: DateTime<Utc>,
    pub images: Vec<ProcessedImage>,
    pub trends: TrendSummary,
}

impl HistoricalRecord {
    /// Build a record from runs ordered oldest to newest. Fewer than two
    /// runs yields a flat trend.
    pub fn from_runs(location: impl Into<String>, images: Vec<ProcessedImage>) -> Self {
        let trends = match (images.first(), images.last()) {
            (Some(oldest), Some(newest)) if images.len() > 1 => {
                TrendSummary::between(&oldest.analysis, &newest.analysis)
            }
            _ => TrendSummary::default(),
        };
        let date = images
            .last()
            .map(|image| image.image.uploaded_at)
            .unwrap_or_else(Utc::now);

        Self {
            id: Uuid::new_v4(),
            location: location.into(),
            date,
            images,
            trends,
        }
    }

    pub fn run_count(&self) -> usize {
        self.images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::RiskLevel;
    use crate::samples;

    fn run_with(risk: RiskLevel, area: f64) -> ProcessedImage {
        let mut image = samples::processed_images().remove(3);
        image.analysis.risk_level = risk;
        image.analysis.affected_area_percentage = area;
        image
    }

    #[test]
    fn test_trend_measures_newest_minus_oldest() {
        let oldest = run_with(RiskLevel::Low, 7.2);
        let newest = run_with(RiskLevel::Critical, 45.9);
        let trends = TrendSummary::between(&oldest.analysis, &newest.analysis);

        assert_eq!(trends.risk_change, 3);
        assert!((trends.area_change - 38.7).abs() < 1e-9);
        assert!(trends.is_worsening());
    }

    #[test]
    fn test_improving_trend_is_negative() {
        let oldest = run_with(RiskLevel::High, 30.0);
        let newest = run_with(RiskLevel::Medium, 12.0);
        let trends = TrendSummary::between(&oldest.analysis, &newest.analysis);

        assert_eq!(trends.risk_change, -1);
        assert!(!trends.is_worsening());
    }

    #[test]
    fn test_record_from_runs_tracks_the_endpoints() {
        let runs = vec![
            run_with(RiskLevel::Low, 5.0),
            run_with(RiskLevel::Medium, 11.0),
            run_with(RiskLevel::High, 28.0),
        ];
        let newest_at = runs[2].image.uploaded_at;
        let record = HistoricalRecord::from_runs("Highway 9 cutting", runs);

        assert_eq!(record.run_count(), 3);
        assert_eq!(record.date, newest_at);
        assert_eq!(record.trends.risk_change, 2);
        assert!((record.trends.area_change - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_run_record_has_a_flat_trend() {
        let record =
            HistoricalRecord::from_runs("Coastal bluff", vec![run_with(RiskLevel::Medium, 18.3)]);
        assert_eq!(record.trends, TrendSummary::default());
        assert_eq!(record.run_count(), 1);
    }
}
