//! 可观测性模块
//!
//! 提供简单指标、结构化日志和健康检查。

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::config::LoggingConfig;

// ===== Simple Metrics =====

/// 简单应用指标
#[derive(Debug, Default)]
pub struct AppMetrics {
    analysis_requests_total: AtomicU64,
    analysis_completed_total: AtomicU64,
    analysis_duration_sum: AtomicU64,
    sos_alerts_total: AtomicU64,
    generation_failures_total: AtomicU64,
    validation_rejections_total: AtomicU64,
}

impl AppMetrics {
    /// 记录一次成功的分析
    pub fn record_analysis(&self, duration_ms: u64, sos_alert: bool) {
        self.analysis_requests_total.fetch_add(1, Ordering::SeqCst);
        self.analysis_completed_total.fetch_add(1, Ordering::SeqCst);
        self.analysis_duration_sum
            .fetch_add(duration_ms, Ordering::SeqCst);
        if sos_alert {
            self.sos_alerts_total.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// 记录生成失败（降级响应）
    pub fn record_generation_failure(&self) {
        self.analysis_requests_total.fetch_add(1, Ordering::SeqCst);
        self.generation_failures_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录被拒绝的请求
    pub fn record_validation_rejection(&self) {
        self.validation_rejections_total
            .fetch_add(1, Ordering::SeqCst);
    }

    pub fn sos_alerts(&self) -> u64 {
        self.sos_alerts_total.load(Ordering::SeqCst)
    }

    pub fn generation_failures(&self) -> u64 {
        self.generation_failures_total.load(Ordering::SeqCst)
    }

    pub fn validation_rejections(&self) -> u64 {
        self.validation_rejections_total.load(Ordering::SeqCst)
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP analysis_requests_total Total vitals analysis requests
# TYPE analysis_requests_total counter
analysis_requests_total {}
# HELP analysis_duration_seconds Completed analysis duration in seconds
# TYPE analysis_duration_seconds histogram
analysis_duration_seconds_sum {}
analysis_duration_seconds_count {}
# HELP sos_alerts_total Analyses that raised an SOS alert
# TYPE sos_alerts_total counter
sos_alerts_total {}
# HELP generation_failures_total Analyses answered with the fallback text
# TYPE generation_failures_total counter
generation_failures_total {}
# HELP validation_rejections_total Requests rejected as incomplete
# TYPE validation_rejections_total counter
validation_rejections_total {}
"#,
            self.analysis_requests_total.load(Ordering::SeqCst),
            self.analysis_duration_sum.load(Ordering::SeqCst) as f64 / 1000.0,
            self.analysis_completed_total.load(Ordering::SeqCst),
            self.sos_alerts(),
            self.generation_failures(),
            self.validation_rejections(),
        )
    }
}

// ===== Health Check =====

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model: String,
}

/// 可观测性状态
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub start_time: DateTime<Utc>,
    pub version: String,
    pub model_name: String,
}

impl ObservabilityState {
    pub fn new(version: String, model_name: String, metrics: Arc<AppMetrics>) -> Self {
        Self {
            metrics,
            start_time: Utc::now(),
            version,
            model_name,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

// ===== Health Check Handlers =====

/// 健康检查，不探测后端可用性
pub async fn health_check(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        model: state.model_name.clone(),
    })
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// Prometheus 指标端点
pub async fn metrics(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let output = state.metrics.gather();
    (axum::http::StatusCode::OK, output)
}

/// 版本信息端点
pub async fn version(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "model": state.model_name,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化日志
///
/// `RUST_LOG` 优先于配置中的级别。配置了 `log_dir` 时同时按天滚动写入文件，
/// 返回的 guard 需要保持到进程退出。
pub fn init_tracing(config: &LoggingConfig, service_name: &str) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file_writer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, format!("{service_name}.log"));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.structured {
        registry
            .with(fmt::layer().json().with_target(true))
            .with(file_writer.map(|w| fmt::layer().json().with_ansi(false).with_writer(w)))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(file_writer.map(|w| fmt::layer().with_ansi(false).with_writer(w)))
            .init();
    }

    guard
}
