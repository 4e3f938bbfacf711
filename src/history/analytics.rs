use chrono::Datelike;
use serde::Serialize;

use super::store::HistoryStore;
use crate::analysis::types::RiskLevel;

/// Record counts per risk level; feeds the distribution chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl RiskDistribution {
    pub fn from_store(store: &HistoryStore) -> Self {
        let mut distribution = Self::default();
        for record in store.iter() {
            distribution.bump(record.risk_level());
        }
        distribution
    }

    fn bump(&mut self, risk: RiskLevel) {
        match risk {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Critical => self.critical += 1,
        }
    }

    pub fn count(&self, risk: RiskLevel) -> usize {
        match risk {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
            RiskLevel::Critical => self.critical,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

/// Records analyzed in one calendar month; feeds the activity chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

/// Per-month record counts in chronological order.
pub fn monthly_counts(store: &HistoryStore) -> Vec<MonthlyCount> {
    let mut counts: Vec<MonthlyCount> = Vec::new();
    for record in store.iter() {
        let uploaded = record.image.uploaded_at;
        let (year, month) = (uploaded.year(), uploaded.month());
        match counts
            .iter_mut()
            .find(|entry| entry.year == year && entry.month == month)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(MonthlyCount {
                year,
                month,
                count: 1,
            }),
        }
    }
    counts.sort_by_key(|entry| (entry.year, entry.month));
    counts
}

/// Headline numbers for the dashboard's stat cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub total_analyzed: usize,
    /// Records at high or critical risk.
    pub high_risk_areas: usize,
    pub detected_features: usize,
    pub mean_confidence: f64,
}

impl DashboardSnapshot {
    pub fn from_store(store: &HistoryStore) -> Self {
        let total_analyzed = store.len();
        let mut high_risk_areas = 0;
        let mut detected_features = 0;
        let mut confidence_sum = 0.0;

        for record in store.iter() {
            if record.risk_level() >= RiskLevel::High {
                high_risk_areas += 1;
            }
            detected_features += record.analysis.detected_features.len();
            confidence_sum += record.analysis.confidence;
        }

        let mean_confidence = if total_analyzed == 0 {
            0.0
        } else {
            confidence_sum / total_analyzed as f64
        };

        Self {
            total_analyzed,
            high_risk_areas,
            detected_features,
            mean_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    fn seeded_store() -> HistoryStore {
        let mut store = HistoryStore::new(16);
        for image in samples::processed_images() {
            store.record(image);
        }
        store
    }

    #[test]
    fn test_distribution_counts_every_sample_once() {
        let distribution = RiskDistribution::from_store(&seeded_store());
        assert_eq!(distribution.low, 1);
        assert_eq!(distribution.medium, 1);
        assert_eq!(distribution.high, 1);
        assert_eq!(distribution.critical, 1);
        assert_eq!(distribution.total(), 4);
        assert_eq!(distribution.count(RiskLevel::Critical), 1);
    }

    #[test]
    fn test_empty_store_yields_an_empty_distribution() {
        let store = HistoryStore::new(4);
        assert_eq!(RiskDistribution::from_store(&store), RiskDistribution::default());
        assert!(monthly_counts(&store).is_empty());
    }

    #[test]
    fn test_monthly_counts_group_and_stay_chronological() {
        let counts = monthly_counts(&seeded_store());
        assert_eq!(
            counts,
            vec![
                MonthlyCount {
                    year: 2025,
                    month: 4,
                    count: 3
                },
                MonthlyCount {
                    year: 2025,
                    month: 5,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_snapshot_aggregates_the_samples() {
        let snapshot = DashboardSnapshot::from_store(&seeded_store());
        assert_eq!(snapshot.total_analyzed, 4);
        assert_eq!(snapshot.high_risk_areas, 2);
        assert_eq!(snapshot.detected_features, 6);

        let expected_mean = (87.5 + 72.8 + 94.2 + 68.9) / 4.0;
        assert!((snapshot.mean_confidence - expected_mean).abs() < 1e-9);
    }

    #[test]
    fn test_empty_snapshot_reports_zero_confidence() {
        let snapshot = DashboardSnapshot::from_store(&HistoryStore::new(4));
        assert_eq!(snapshot, DashboardSnapshot::default());
    }
}
