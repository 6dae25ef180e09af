//! 大模型客户端模块
//!
//! 把提示词发送给文本生成后端并取回文本结果。

pub mod client;
pub mod response;

use async_trait::async_trait;
use thiserror::Error;

pub use client::OpenAiCompatibleClient;
pub use response::{CompletionResponse, GeneratedContent};

/// 文本生成错误
///
/// 后端的原始错误在这里收敛，调用方只会看到这些变体。
#[derive(Error, Debug)]
pub enum GenerationError {
    /// 网络或超时
    #[error("请求失败: {0}")]
    Transport(String),

    /// 后端返回非 2xx
    #[error("后端返回错误 ({status}): {body}")]
    Status { status: u16, body: String },

    /// 响应体无法解析
    #[error("响应解析失败: {0}")]
    Decode(String),

    /// 响应中没有可用文本
    #[error("响应中没有可用文本")]
    EmptyContent,

    /// 客户端配置错误
    #[error("客户端配置错误: {0}")]
    Config(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GenerationError::Decode(e.to_string())
        } else {
            GenerationError::Transport(e.to_string())
        }
    }
}

/// 文本生成后端
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 发送提示词，返回生成文本
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// 当前使用的模型名称
    fn model_name(&self) -> &str;
}
