//! 服务模块

pub mod alert;
pub mod analysis;

pub use alert::{ALERT_MARKER, classify};
pub use analysis::{AnalysisService, FALLBACK_ANALYSIS, create_analysis_service};
