//! Vida+Ativa - 老年人生命体征分析服务
//!
//! 接收心率、睡眠和步数，结合固定知识库构造提示词交给大模型，
//! 返回自然语言分析以及是否需要紧急求助。

pub mod api;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod llm;
pub mod models;
pub mod observability;
pub mod prompt;
pub mod services;
