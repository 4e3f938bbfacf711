//! Canned processed-image records carried over from the product's seed
//! data. Display-only fixtures: payloads are empty and the scores are the
//! published sample values, so they exercise the history and analytics
//! surfaces without touching the engine.

use std::path::PathBuf;

use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::analysis::types::{
    AnalysisMetadata, AnalysisResult, BoundingBox, DetectedFeature, FeatureKind, ImageFile,
    MediaType, Preview, ProcessedImage, RiskLevel,
};

/// The four seed records, oldest upload last.
pub fn processed_images() -> Vec<ProcessedImage> {
    vec![
        sample(
            "mountain_region_1.jpg",
            2_400_000,
            at(2025, 5, 1, 10, 30),
            AnalysisResult {
                risk_level: RiskLevel::High,
                confidence: 87.5,
                affected_area_percentage: 32.7,
                detected_features: vec![
                    feature(
                        FeatureKind::SlopeFailure,
                        89.3,
                        BoundingBox::new(250, 320, 120, 80),
                        "Steep slope with visible cracks and displaced material",
                    ),
                    feature(
                        FeatureKind::DebrisFlow,
                        78.5,
                        BoundingBox::new(400, 450, 150, 100),
                        "Channel with recent debris flow activity",
                    ),
                ],
                timestamp: at(2025, 5, 1, 10, 45),
                metadata: metadata("Advanced Edge Detection v2.3", 4532, "1920x1080"),
            },
        ),
        sample(
            "coastal_area_scan.jpg",
            3_150_000,
            at(2025, 4, 28, 15, 20),
            AnalysisResult {
                risk_level: RiskLevel::Medium,
                confidence: 72.8,
                affected_area_percentage: 18.3,
                detected_features: vec![feature(
                    FeatureKind::PotentialTrigger,
                    65.1,
                    BoundingBox::new(180, 240, 90, 60),
                    "Heavy precipitation area with saturated soil",
                )],
                timestamp: at(2025, 4, 28, 15, 35),
                metadata: metadata("Texture Analysis Suite v1.8", 3897, "2048x1536"),
            },
        ),
        sample(
            "highway_mountain_pass.jpg",
            2_780_000,
            at(2025, 4, 25, 9, 10),
            AnalysisResult {
                risk_level: RiskLevel::Critical,
                confidence: 94.2,
                affected_area_percentage: 45.9,
                detected_features: vec![
                    feature(
                        FeatureKind::Rockfall,
                        96.7,
                        BoundingBox::new(320, 280, 110, 70),
                        "Unstable rock formation with recent activity",
                    ),
                    feature(
                        FeatureKind::SlopeFailure,
                        92.8,
                        BoundingBox::new(510, 360, 130, 90),
                        "Major slope instability with visible deformation",
                    ),
                    feature(
                        FeatureKind::EarthFlow,
                        88.5,
                        BoundingBox::new(420, 430, 140, 85),
                        "Saturated soil with active earth flow movement",
                    ),
                ],
                timestamp: at(2025, 4, 25, 9, 25),
                metadata: metadata("Combined DIP Analysis v3.1", 6218, "2560x1440"),
            },
        ),
        sample(
            "forest_hillside.jpg",
            2_190_000,
            at(2025, 4, 22, 14, 45),
            AnalysisResult {
                risk_level: RiskLevel::Low,
                confidence: 68.9,
                affected_area_percentage: 7.2,
                detected_features: Vec::new(),
                timestamp: at(2025, 4, 22, 15, 0),
                metadata: metadata("Forest Terrain Analysis v2.5", 3456, "1920x1080"),
            },
        ),
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    // All sample timestamps are fixed, valid calendar dates.
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

fn metadata(algorithm: &str, processing_time_ms: u64, resolution: &str) -> AnalysisMetadata {
    AnalysisMetadata {
        algorithm: algorithm.to_string(),
        processing_time_ms,
        resolution: resolution.to_string(),
    }
}

fn feature(
    kind: FeatureKind,
    confidence: f64,
    region: BoundingBox,
    description: &str,
) -> DetectedFeature {
    DetectedFeature {
        id: Uuid::new_v4(),
        kind,
        confidence,
        region,
        description: description.to_string(),
    }
}

fn sample(
    name: &str,
    size: u64,
    uploaded_at: DateTime<Utc>,
    analysis: AnalysisResult,
) -> ProcessedImage {
    let preview = Preview::new(MediaType::Jpeg, Bytes::new());
    let image = ImageFile {
        id: Uuid::new_v4(),
        source: PathBuf::from(name),
        payload: Bytes::new(),
        preview: preview.clone(),
        name: name.to_string(),
        size,
        media_type: MediaType::Jpeg,
        uploaded_at,
    };

    ProcessedImage {
        image,
        processed: true,
        processed_preview: preview,
        analysis,
    }
}
