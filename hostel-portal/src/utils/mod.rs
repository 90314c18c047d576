//! 工具模块 - 日志与输入校验
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - registration form rules

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCode};
