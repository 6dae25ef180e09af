//! Vitals Routes
//!
//! 定义生命体征分析路由。

use crate::api::handlers::vitals_handler::*;
use axum::{Router, routing::post};

use crate::api::app_state::AppState;

/// 创建分析路由器
pub fn create_vitals_router() -> Router<AppState> {
    Router::new().route("/analyze_vitals", post(analyze_vitals))
}
