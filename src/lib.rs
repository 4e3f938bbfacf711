pub mod analysis;
pub mod config;
pub mod error;
pub mod history;
pub mod intake;
pub mod samples;

pub use error::{AnalysisError, ScanError, UploadError};

pub use analysis::engine::{AnalysisEngine, AnalysisRequest, MockAnalysisEngine};
pub use analysis::service::AnalysisService;
pub use analysis::session::AnalysisSession;
pub use analysis::types::{AnalysisResult, ImageFile, ProcessedImage, ProcessingOptions, RiskLevel};
pub use config::Configuration;
pub use history::HistoryStore;
pub use intake::ImageUploader;
