//! 认证模块 - 模拟登录/注册
//!
//! - [`AuthManager`] - login, registration, logout and the route guard
//! - [`users`] - fixed credential table
//! - [`token`] - opaque session token

mod error;
mod manager;
pub mod token;
pub mod users;

pub use error::*;
pub use manager::{AuthManager, LoginOutcome};
