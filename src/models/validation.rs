//! Request Validation Module
//!
//! 生命体征读数的完整性校验。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 返回给调用方的统一提示
pub const INCOMPLETE_VITALS_DETAIL: &str = "Dados vitais incompletos.";

/// Validation error types
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Required field '{field}' is missing")]
    MissingField { field: String },

    #[error("Field '{field}' must be non-zero")]
    Falsy { field: String },
}

impl ValidationError {
    /// 对外暴露的错误详情，不区分具体字段
    pub fn detail(&self) -> &'static str {
        INCOMPLETE_VITALS_DETAIL
    }

    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field } | ValidationError::Falsy { field } => field,
        }
    }

    pub fn missing(field: &str) -> Self {
        ValidationError::MissingField {
            field: field.to_string(),
        }
    }

    pub fn falsy(field: &str) -> Self {
        ValidationError::Falsy {
            field: field.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_shared() {
        assert_eq!(
            ValidationError::missing("user_id").detail(),
            ValidationError::falsy("steps_count").detail()
        );
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(ValidationError::falsy("heart_rate").field(), "heart_rate");
        assert_eq!(
            ValidationError::missing("user_id").to_string(),
            "Required field 'user_id' is missing"
        );
    }
}
