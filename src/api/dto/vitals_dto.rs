//! 生命体征 DTO
//!
//! 定义分析接口的请求和响应数据结构。

use serde::{Deserialize, Serialize};

use crate::models::validation::ValidationError;
use crate::models::vitals::{AnalysisResult, VitalReading};

/// 分析请求
///
/// 字段都是可选的，缺失时返回 400 而不是反序列化错误。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeVitalsRequest {
    /// 静息心率
    pub heart_rate: Option<i64>,
    /// 睡眠时长（小时）
    pub sleep_duration_hours: Option<f64>,
    /// 步数
    pub steps_count: Option<i64>,
    /// 用户标识
    pub user_id: Option<String>,
}

impl AnalyzeVitalsRequest {
    /// 转换为读数，检查字段是否齐全
    pub fn into_reading(self) -> Result<VitalReading, ValidationError> {
        let heart_rate = self
            .heart_rate
            .ok_or_else(|| ValidationError::missing("heart_rate"))?;
        let sleep_duration_hours = self
            .sleep_duration_hours
            .ok_or_else(|| ValidationError::missing("sleep_duration_hours"))?;
        let steps_count = self
            .steps_count
            .ok_or_else(|| ValidationError::missing("steps_count"))?;
        let user_id = self
            .user_id
            .ok_or_else(|| ValidationError::missing("user_id"))?;

        Ok(VitalReading {
            heart_rate,
            sleep_duration_hours,
            steps_count,
            user_id,
        })
    }
}

/// 分析响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeVitalsResponse {
    /// 分析与建议
    pub analysis: String,
    /// 紧急求助标记
    pub sos_alert: bool,
}

impl From<AnalysisResult> for AnalyzeVitalsResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            analysis: result.analysis,
            sos_alert: result.sos_alert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_request() {
        let request: AnalyzeVitalsRequest = serde_json::from_value(json!({
            "heart_rate": 105,
            "sleep_duration_hours": 5.5,
            "steps_count": 800,
            "user_id": "idoso_001"
        }))
        .unwrap();

        let reading = request.into_reading().unwrap();
        assert_eq!(reading, VitalReading::new(105, 5.5, 800, "idoso_001"));
    }

    #[test]
    fn test_integer_sleep_accepted() {
        let request: AnalyzeVitalsRequest = serde_json::from_value(json!({
            "heart_rate": 130,
            "sleep_duration_hours": 6,
            "steps_count": 3000,
            "user_id": "u1"
        }))
        .unwrap();

        assert_eq!(request.into_reading().unwrap().sleep_duration_hours, 6.0);
    }

    #[test]
    fn test_missing_field() {
        let request: AnalyzeVitalsRequest = serde_json::from_value(json!({
            "heart_rate": 80,
            "sleep_duration_hours": 7.0,
            "user_id": "u1"
        }))
        .unwrap();

        assert_eq!(
            request.into_reading().unwrap_err(),
            ValidationError::missing("steps_count")
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let request: AnalyzeVitalsRequest = serde_json::from_value(json!({
            "heart_rate": 80,
            "sleep_duration_hours": 7.0,
            "steps_count": 100,
            "user_id": null
        }))
        .unwrap();

        assert_eq!(
            request.into_reading().unwrap_err(),
            ValidationError::missing("user_id")
        );
    }
}
