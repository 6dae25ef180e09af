//! 生命体征分析服务
//!
//! 串联知识库、提示词、文本生成与告警分类。生成失败时降级为固定提示，
//! 不向调用方暴露后端错误。

use async_trait::async_trait;
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::knowledge::KnowledgeStore;
use crate::llm::TextGenerator;
use crate::models::vitals::{AnalysisResult, VitalReading};
use crate::observability::AppMetrics;
use crate::prompt::build_prompt;
use crate::services::alert::{SOS_HEART_RATE_THRESHOLD, classify};

/// 生成失败时返回的分析文本
pub const FALLBACK_ANALYSIS: &str = "Erro ao processar a análise de IA.";

#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// 校验读数并生成分析
    ///
    /// 只有读数不完整时返回错误，生成失败会降级为 [`FALLBACK_ANALYSIS`]。
    async fn analyze(&self, reading: &VitalReading) -> Result<AnalysisResult>;

    /// 后端模型名称
    fn model_name(&self) -> &str;
}

pub struct VitalsAnalysisService {
    knowledge: Arc<KnowledgeStore>,
    generator: Arc<dyn TextGenerator>,
    metrics: Arc<AppMetrics>,
}

impl VitalsAnalysisService {
    pub fn new(
        knowledge: Arc<KnowledgeStore>,
        generator: Arc<dyn TextGenerator>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            knowledge,
            generator,
            metrics,
        }
    }

    fn fallback(&self) -> AnalysisResult {
        self.metrics.record_generation_failure();
        AnalysisResult::new(FALLBACK_ANALYSIS, false)
    }
}

#[async_trait]
impl AnalysisService for VitalsAnalysisService {
    async fn analyze(&self, reading: &VitalReading) -> Result<AnalysisResult> {
        if let Err(e) = reading.validate() {
            debug!(user_id = %reading.user_id, field = e.field(), "Rejected incomplete vitals");
            self.metrics.record_validation_rejection();
            return Err(e.into());
        }

        let start = std::time::Instant::now();
        let context = self.knowledge.context();
        let prompt = build_prompt(&context, reading);

        // 调用放进 async 块，实现里同步发生的 panic 也能被捕获
        let outcome = AssertUnwindSafe(async { self.generator.generate(&prompt).await })
            .catch_unwind()
            .await;

        let analysis = match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                error!(user_id = %reading.user_id, error = %e, "Error during LLM call");
                return Ok(self.fallback());
            }
            Err(_) => {
                error!(user_id = %reading.user_id, "Text generator panicked");
                return Ok(self.fallback());
            }
        };

        let sos_alert = classify(&analysis);
        self.metrics
            .record_analysis(start.elapsed().as_millis() as u64, sos_alert);

        if sos_alert {
            warn!(user_id = %reading.user_id, heart_rate = reading.heart_rate, "ALERTA SOS ACIONADO");
        } else if reading.heart_rate > SOS_HEART_RATE_THRESHOLD {
            warn!(
                user_id = %reading.user_id,
                heart_rate = reading.heart_rate,
                "Heart rate above SOS threshold but generated analysis has no alert marker"
            );
        }

        info!(
            user_id = %reading.user_id,
            sos_alert,
            analysis_len = analysis.len(),
            "Vitals analysis completed"
        );

        Ok(AnalysisResult::new(analysis, sos_alert))
    }

    fn model_name(&self) -> &str {
        self.generator.model_name()
    }
}

pub fn create_analysis_service(
    knowledge: Arc<KnowledgeStore>,
    generator: Arc<dyn TextGenerator>,
    metrics: Arc<AppMetrics>,
) -> Box<dyn AnalysisService> {
    Box::new(VitalsAnalysisService::new(knowledge, generator, metrics))
}
