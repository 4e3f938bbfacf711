use std::ops::Range;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::sleep;
use uuid::Uuid;

use crate::analysis::types::{
    AnalysisMetadata, AnalysisResult, BoundingBox, DetectedFeature, FeatureKind, ImageFile,
    Preview, ProcessedImage, ProcessingOptions, RiskLevel,
};
use crate::error::AnalysisError;

/// Algorithm identifier reported in every synthesized result.
const ALGORITHM_NAME: &str = "Landslide Detection Algorithm v1.0";
/// Resolution label reported in every synthesized result.
const ANALYZED_RESOLUTION: &str = "1280x720";

const OVERALL_CONFIDENCE_PCT: Range<f64> = 60.0..100.0;
const AFFECTED_AREA_PCT: Range<f64> = 0.0..50.0;
const FEATURE_CONFIDENCE_PCT: Range<f64> = 60.0..100.0;
const REPORTED_DURATION_MS: Range<u64> = 2000..6000;
const PROCESSING_DELAY_MS: Range<u64> = 2000..4000;

const BOX_X_PX: Range<u32> = 0..800;
const BOX_Y_PX: Range<u32> = 0..600;
const BOX_WIDTH_PX: Range<u32> = 50..150;
const BOX_HEIGHT_PX: Range<u32> = 40..120;

/// One analysis run: the uploaded image plus the sensitivity options
/// collected alongside it.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub image: ImageFile,
    pub options: ProcessingOptions,
}

impl AnalysisRequest {
    pub fn new(image: ImageFile, options: ProcessingOptions) -> Self {
        Self { image, options }
    }
}

/// Seam between the workflow and whatever produces analysis results.
///
/// The crate ships `MockAnalysisEngine`; a real detection pipeline slots in
/// behind this trait without touching the calling workflow.
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> Result<ProcessedImage, AnalysisError>;

    fn name(&self) -> &'static str;
}

/// Synthetic stand-in for the real detection pipeline. Re-reads the source
/// image, waits out a simulated processing window, then fabricates a risk
/// assessment from bounded random draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalysisEngine;

impl MockAnalysisEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnalysisEngine for MockAnalysisEngine {
    async fn analyze(&self, request: AnalysisRequest) -> Result<ProcessedImage, AnalysisError> {
        let mut rng = StdRng::from_os_rng();
        let AnalysisRequest { image, options } = request;

        tracing::debug!(
            "Starting analysis run for {} with {} option values",
            image.name,
            options.len()
        );

        // Fresh read of the source; the upload-time copy is never reused.
        // The single failure mode of a run lives here.
        let payload = tokio::fs::read(&image.source)
            .await
            .map_err(|source| AnalysisError::SourceRead {
                path: image.source.clone(),
                source,
            })?;
        let payload = Bytes::from(payload);

        let delay = draw_processing_delay(&mut rng);
        sleep(delay).await;

        let analysis = synthesize_result(&mut rng);
        tracing::info!(
            "Analysis of {} complete: {} risk, {} features",
            image.name,
            analysis.risk_level,
            analysis.detected_features.len()
        );

        Ok(bind_processed_image(image, payload, analysis))
    }

    fn name(&self) -> &'static str {
        "MockAnalysisEngine"
    }
}

/// Bind a completed run into a `ProcessedImage`. The embedded image gets a
/// fresh identity and timestamp, so every run yields an independent record
/// even for the same source.
fn bind_processed_image(
    source: ImageFile,
    payload: Bytes,
    analysis: AnalysisResult,
) -> ProcessedImage {
    let preview = Preview::new(source.media_type, payload.clone());
    let image = ImageFile {
        id: Uuid::new_v4(),
        source: source.source,
        payload,
        preview: preview.clone(),
        name: source.name,
        size: source.size,
        media_type: source.media_type,
        uploaded_at: Utc::now(),
    };

    ProcessedImage {
        image,
        processed: true,
        processed_preview: preview,
        analysis,
    }
}

fn draw_processing_delay(rng: &mut impl Rng) -> Duration {
    Duration::from_millis(rng.random_range(PROCESSING_DELAY_MS))
}

/// How many features each risk level fabricates, as a half-open range.
fn feature_count_range(risk_level: RiskLevel) -> Range<usize> {
    match risk_level {
        RiskLevel::Low => 0..2,
        RiskLevel::Medium => 1..3,
        RiskLevel::High => 2..4,
        RiskLevel::Critical => 3..6,
    }
}

fn draw_risk_level(rng: &mut impl Rng) -> RiskLevel {
    RiskLevel::ALL[rng.random_range(0..RiskLevel::ALL.len())]
}

fn draw_feature_kind(rng: &mut impl Rng) -> FeatureKind {
    FeatureKind::ALL[rng.random_range(0..FeatureKind::ALL.len())]
}

fn synthesize_feature(rng: &mut impl Rng) -> DetectedFeature {
    let kind = draw_feature_kind(rng);
    DetectedFeature {
        id: Uuid::new_v4(),
        kind,
        confidence: rng.random_range(FEATURE_CONFIDENCE_PCT),
        region: BoundingBox::new(
            rng.random_range(BOX_X_PX),
            rng.random_range(BOX_Y_PX),
            rng.random_range(BOX_WIDTH_PX),
            rng.random_range(BOX_HEIGHT_PX),
        ),
        description: kind.description().to_string(),
    }
}

/// Fabricate one result: risk level first, then a feature count keyed on
/// it, then the independent overall scores.
fn synthesize_result(rng: &mut impl Rng) -> AnalysisResult {
    let risk_level = draw_risk_level(rng);
    let feature_count = rng.random_range(feature_count_range(risk_level));
    let detected_features = (0..feature_count).map(|_| synthesize_feature(rng)).collect();

    AnalysisResult {
        risk_level,
        confidence: rng.random_range(OVERALL_CONFIDENCE_PCT),
        affected_area_percentage: rng.random_range(AFFECTED_AREA_PCT),
        detected_features,
        timestamp: Utc::now(),
        metadata: AnalysisMetadata {
            algorithm: ALGORITHM_NAME.to_string(),
            processing_time_ms: rng.random_range(REPORTED_DURATION_MS),
            resolution: ANALYZED_RESOLUTION.to_string(),
        },
    }
}
