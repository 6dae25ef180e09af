use serde::{Deserialize, Serialize};

use crate::models::validation::ValidationError;

/// 单次上报的生命体征读数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    /// 静息心率（bpm）
    pub heart_rate: i64,
    /// 上一晚睡眠时长（小时）
    pub sleep_duration_hours: f64,
    /// 过去 24 小时步数
    pub steps_count: i64,
    /// 用户标识
    pub user_id: String,
}

impl VitalReading {
    pub fn new(
        heart_rate: i64,
        sleep_duration_hours: f64,
        steps_count: i64,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            heart_rate,
            sleep_duration_hours,
            steps_count,
            user_id: user_id.into(),
        }
    }

    /// 检查三项数值均为非零
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.heart_rate == 0 {
            return Err(ValidationError::falsy("heart_rate"));
        }
        if self.sleep_duration_hours == 0.0 {
            return Err(ValidationError::falsy("sleep_duration_hours"));
        }
        if self.steps_count == 0 {
            return Err(ValidationError::falsy("steps_count"));
        }
        Ok(())
    }
}

/// 分析结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 自然语言分析与建议
    pub analysis: String,
    /// 是否需要紧急求助
    pub sos_alert: bool,
}

impl AnalysisResult {
    pub fn new(analysis: impl Into<String>, sos_alert: bool) -> Self {
        Self {
            analysis: analysis.into(),
            sos_alert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_reading() {
        let reading = VitalReading::new(72, 7.5, 4200, "idoso_001");
        assert!(reading.validate().is_ok());
    }

    #[rstest]
    #[case(0, 7.0, 3000, "heart_rate")]
    #[case(80, 0.0, 3000, "sleep_duration_hours")]
    #[case(80, 7.0, 0, "steps_count")]
    fn test_zero_fields_rejected(
        #[case] heart_rate: i64,
        #[case] sleep: f64,
        #[case] steps: i64,
        #[case] field: &str,
    ) {
        let reading = VitalReading::new(heart_rate, sleep, steps, "u1");
        let err = reading.validate().unwrap_err();
        assert_eq!(err, ValidationError::falsy(field));
    }

    #[test]
    fn test_negative_values_pass() {
        // 只拒绝零值
        let reading = VitalReading::new(-1, -0.5, -10, "u1");
        assert!(reading.validate().is_ok());
    }

    #[test]
    fn test_analysis_result_serialization() {
        let result = AnalysisResult::new("Tudo normal.", false);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["analysis"], "Tudo normal.");
        assert_eq!(json["sos_alert"], false);
    }
}
