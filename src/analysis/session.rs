use tower::Service;

use crate::analysis::engine::AnalysisRequest;
use crate::analysis::service::AnalysisService;
use crate::analysis::types::{ImageFile, ProcessedImage, ProcessingOptions};
use crate::error::ScanError;

/// State for one upload-and-analyze workflow.
///
/// Holds at most one uploaded image and at most one result for it.
/// `process` takes `&mut self` for its whole run, which keeps a session to
/// one outstanding analysis at a time.
pub struct AnalysisSession {
    service: AnalysisService,
    uploaded: Option<ImageFile>,
    result: Option<ProcessedImage>,
}

impl AnalysisSession {
    pub fn new(service: AnalysisService) -> Self {
        Self {
            service,
            uploaded: None,
            result: None,
        }
    }

    /// Stage a new upload, discarding any previous image and its result.
    pub fn attach_image(&mut self, image: ImageFile) {
        tracing::debug!("Attached {} to the session", image.name);
        self.result = None;
        self.uploaded = Some(image);
    }

    pub fn uploaded(&self) -> Option<&ImageFile> {
        self.uploaded.as_ref()
    }

    pub fn result(&self) -> Option<&ProcessedImage> {
        self.result.as_ref()
    }

    pub fn clear(&mut self) {
        self.uploaded = None;
        self.result = None;
    }

    /// Run the engine over the attached image.
    ///
    /// Failures propagate to the caller; the attached image stays in place
    /// so the run can be re-submitted.
    pub async fn process(
        &mut self,
        options: ProcessingOptions,
    ) -> Result<&ProcessedImage, ScanError> {
        let image = self.uploaded.clone().ok_or(ScanError::NoImageAttached)?;
        let name = image.name.clone();

        match self.service.call(AnalysisRequest::new(image, options)).await {
            Ok(processed) => Ok(&*self.result.insert(processed)),
            Err(error) => {
                tracing::error!("Analysis of {} failed: {}", name, error);
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bytes::Bytes;
    use uuid::Uuid;

    use super::*;
    use crate::analysis::engine::MockAnalysisEngine;
    use crate::analysis::types::MediaType;
    use crate::error::AnalysisError;

    fn session() -> AnalysisSession {
        AnalysisSession::new(AnalysisService::new(Box::new(MockAnalysisEngine::new())))
    }

    fn write_temp_image(payload: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("terrascan-session-{}.jpg", Uuid::new_v4()));
        std::fs::write(&path, payload).unwrap();
        path
    }

    fn upload_at(path: PathBuf) -> ImageFile {
        ImageFile::new(path, Bytes::from_static(&[0xFF, 0xD8, 0xFF]), MediaType::Jpeg)
    }

    #[tokio::test]
    async fn test_process_without_an_image_is_rejected() {
        let mut session = session();
        let error = session.process(ProcessingOptions::new()).await.unwrap_err();
        assert!(matches!(error, ScanError::NoImageAttached));
    }

    #[tokio::test(start_paused = true)]
    async fn test_process_stores_the_result_beside_the_upload() {
        let mut session = session();
        let path = write_temp_image(&[0xFF, 0xD8, 0xFF, 0xE0]);
        session.attach_image(upload_at(path));

        assert!(session.result().is_none());
        session.process(ProcessingOptions::standard()).await.unwrap();

        assert!(session.uploaded().is_some());
        let result = session.result().unwrap();
        assert!(result.processed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attaching_a_new_image_drops_the_old_result() {
        let mut session = session();
        let path = write_temp_image(&[0xFF, 0xD8, 0xFF, 0xE0]);
        session.attach_image(upload_at(path.clone()));
        session.process(ProcessingOptions::new()).await.unwrap();
        assert!(session.result().is_some());

        session.attach_image(upload_at(path));
        assert!(session.result().is_none());
        assert!(session.uploaded().is_some());
    }

    #[tokio::test]
    async fn test_failed_run_leaves_the_session_resubmittable() {
        let mut session = session();
        session.attach_image(upload_at(PathBuf::from("/nonexistent/slope.jpg")));

        let error = session.process(ProcessingOptions::new()).await.unwrap_err();
        assert!(matches!(
            error,
            ScanError::AnalysisError(AnalysisError::SourceRead { .. })
        ));
        assert!(session.uploaded().is_some());
        assert!(session.result().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reprocessing_replaces_the_result() {
        let mut session = session();
        let path = write_temp_image(&[0xFF, 0xD8, 0xFF, 0xE0, 3]);
        session.attach_image(upload_at(path));

        let first = session.process(ProcessingOptions::new()).await.unwrap().id();
        let second = session.process(ProcessingOptions::new()).await.unwrap().id();
        assert_ne!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_resets_both_slots() {
        let mut session = session();
        let path = write_temp_image(&[0xFF, 0xD8, 0xFF, 0xE0]);
        session.attach_image(upload_at(path));
        session.process(ProcessingOptions::new()).await.unwrap();

        session.clear();
        assert!(session.uploaded().is_none());
        assert!(session.result().is_none());
    }
}
