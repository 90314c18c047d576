//! 核心模块 - 配置、路由、模拟延迟和会话
//!
//! - [`Config`] - 环境变量配置
//! - [`Route`] - 门户页面
//! - [`SimulatedLatency`] - 登录/注册的模拟延迟
//! - [`PortalSession`] - 每次页面挂载的会话

pub mod config;
pub mod latency;
pub mod route;
pub mod session;

pub use config::Config;
pub use latency::SimulatedLatency;
pub use route::{Route, UnknownRoute};
pub use session::{Dashboard, PortalSession};
