use terrascan::analysis::engine::MockAnalysisEngine;
use terrascan::analysis::service::AnalysisService;
use terrascan::config::Configuration;
use terrascan::error::ScanError;
use terrascan::history::{monthly_counts, DashboardSnapshot, HistoryStore, RiskDistribution};
use terrascan::samples;
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

#[tokio::main]
async fn main() -> Result<(), ScanError> {
    init_logging();

    let configuration = Configuration::default();
    configuration
        .validate()
        .map_err(ScanError::ConfigurationError)?;

    let mut store = HistoryStore::new(configuration.history_capacity);
    for image in samples::processed_images() {
        store.record(image);
    }

    let snapshot = DashboardSnapshot::from_store(&store);
    tracing::info!(
        "History seeded: {} analyzed, {} high risk, {} features, mean confidence {:.1}%",
        snapshot.total_analyzed,
        snapshot.high_risk_areas,
        snapshot.detected_features,
        snapshot.mean_confidence
    );

    let distribution = RiskDistribution::from_store(&store);
    tracing::info!(
        "Risk distribution: {} low / {} medium / {} high / {} critical",
        distribution.low,
        distribution.medium,
        distribution.high,
        distribution.critical
    );
    for entry in monthly_counts(&store) {
        tracing::info!("{}-{:02}: {} records", entry.year, entry.month, entry.count);
    }

    let service = AnalysisService::new(Box::new(MockAnalysisEngine::new()));
    tracing::info!("Analysis engine online: {}", service.engine_name());

    for record in store.recent(configuration.recent_uploads_limit) {
        tracing::info!(
            "Recent upload {}: {} risk, {} features",
            record.name(),
            record.risk_level(),
            record.analysis.feature_count()
        );
    }

    Ok(())
}
