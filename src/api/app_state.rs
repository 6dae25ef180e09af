use crate::observability::AppMetrics;
use crate::services::analysis::AnalysisService;
use std::sync::Arc;

/// Application state shared by the API handlers
#[derive(Clone)]
pub struct AppState {
    /// Vitals analysis pipeline
    pub analysis_service: Arc<dyn AnalysisService>,
    /// Request counters
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("analysis_service", &"Arc<dyn AnalysisService>")
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(analysis_service: Box<dyn AnalysisService>, metrics: Arc<AppMetrics>) -> Self {
        Self {
            analysis_service: Arc::from(analysis_service),
            metrics,
        }
    }
}
