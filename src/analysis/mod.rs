pub mod engine;
pub mod options;
pub mod service;
pub mod session;
pub mod types;

pub use engine::{AnalysisEngine, AnalysisRequest, MockAnalysisEngine};
pub use options::{OptionsForm, Preset, TunableParameter};
pub use service::AnalysisService;
pub use session::AnalysisSession;
pub use types::{
    AnalysisMetadata, AnalysisResult, BoundingBox, DetectedFeature, FeatureKind, ImageFile,
    MediaType, Preview, ProcessedImage, ProcessingOptions, RiskLevel,
};
