use std::pin::Pin;
use std::sync::Arc;

use futures::task::Context;
use futures::task::Poll;
use futures::Future;
use tower::Service;

use crate::analysis::engine::{AnalysisEngine, AnalysisRequest};
use crate::analysis::types::ProcessedImage;
use crate::error::AnalysisError;

/// Cloneable tower front for an analysis engine.
///
/// Every call spawns an independent future over the shared engine, so
/// concurrent runs never contend on session state.
#[derive(Clone)]
pub struct AnalysisService {
    inner: Arc<dyn AnalysisEngine>,
}

impl AnalysisService {
    pub fn new(inner: Box<dyn AnalysisEngine>) -> Self {
        Self {
            inner: Arc::from(inner),
        }
    }

    pub fn engine_name(&self) -> &'static str {
        self.inner.name()
    }
}

impl Service<AnalysisRequest> for AnalysisService {
    type Response = ProcessedImage;
    type Error = AnalysisError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: AnalysisRequest) -> Self::Future {
        let inner = self.inner.clone();

        Box::pin(async move { inner.analyze(req).await })
    }
}
