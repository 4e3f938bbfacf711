use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AnalysisResult, ImageFile, Preview, RiskLevel};

/// An upload bound to exactly one analysis outcome.
///
/// Only a completed engine run produces one of these, and the embedded
/// image carries a fresh identity: re-analyzing the same upload yields an
/// independent record, never a mutation of the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedImage {
    pub image: ImageFile,
    pub processed: bool,
    /// Rendering of the analyzed frame for result surfaces.
    pub processed_preview: Preview,
    pub analysis: AnalysisResult,
}

impl ProcessedImage {
    pub fn id(&self) -> Uuid {
        self.image.id
    }

    pub fn name(&self) -> &str {
        &self.image.name
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.analysis.risk_level
    }
}
