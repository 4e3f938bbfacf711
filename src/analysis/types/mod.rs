mod analysis_result;
mod detected_feature;
mod image_file;
mod media;
mod processed_image;
mod processing_options;

pub use analysis_result::{AnalysisMetadata, AnalysisResult, RiskLevel};
pub use detected_feature::{BoundingBox, DetectedFeature, FeatureKind};
pub use image_file::ImageFile;
pub use media::{MediaType, Preview};
pub use processed_image::ProcessedImage;
pub use processing_options::ProcessingOptions;
