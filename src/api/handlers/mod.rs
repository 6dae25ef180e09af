//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod vitals_handler;

pub use vitals_handler::*;
