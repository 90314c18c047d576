//! Hostel Hub portal core - 宿舍门户预订核心
//!
//! # 架构概述
//!
//! Booking core of the hostel portal, driven by UI actions:
//!
//! - **房间目录** (`catalog`): deterministic block/floor/room layout per hostel category
//! - **学生预订** (`booking`): a student's single booking, pending or confirmed
//! - **请求队列** (`requests`): administrator's pending requests and allotment ledger
//! - **认证** (`auth`): mocked login/registration over the snapshot store
//! - **会话** (`core::session`): one session per page mount, dispatching actions
//!
//! # 模块结构
//!
//! ```text
//! hostel-portal/src/
//! ├── core/          # 配置、路由、模拟延迟、会话
//! ├── auth/          # 模拟认证
//! ├── catalog/       # 房间目录
//! ├── booking/       # 学生预订
//! ├── requests/      # 管理员请求队列
//! ├── handler/       # UI actions → view updates
//! ├── storage/       # 快照存储 (memory / redb)
//! └── utils/         # 日志、校验
//! ```

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod core;
pub mod handler;
pub mod requests;
pub mod storage;
pub mod utils;

// Re-export 公共类型
pub use auth::{AuthError, AuthManager};
pub use booking::{BookingError, BookingState, BookingView};
pub use catalog::{Catalog, CatalogView, RoomRef, SelectionError};
pub use core::{Config, PortalSession, Route, SimulatedLatency};
pub use handler::{Action, Render, View, ViewUpdate};
pub use requests::{QueueError, QueueStats, RequestQueue, SharedLedger};
pub use storage::{MemoryStore, RedbStore, SnapshotStore, StoreError};
pub use utils::logger::init_logger;
pub use utils::{AppError, AppResult, ErrorCode};

/// Security log helper - records authentication events
///
/// Events go to the `security` target, which the file logger routes to its
/// own daily file.
///
/// # Examples
/// ```ignore
/// security_log!(WARN, "login_failed", username = %username);
/// security_log!(INFO, "logout", username = %user.username);
/// ```
#[macro_export]
macro_rules! security_log {
    (WARN, $event:expr, $($arg:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            $($arg)*
        );
    };
    (INFO, $event:expr, $($arg:tt)*) => {
        tracing::info!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            $($arg)*
        );
    };
}

/// 设置环境: `.env`、工作目录、日志
///
/// Returns the configuration read after `.env` was applied.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(config.work_dir())?;

    let log_dir = config.log_to_file.then(|| config.log_dir());
    init_logger(&config.log_level, config.log_json, log_dir.as_deref())?;

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    __  __           __       __   __  __      __
   / / / /___  _____/ /____  / /  / / / /_  __/ /_
  / /_/ / __ \/ ___/ __/ _ \/ /  / /_/ / / / / __ \
 / __  / /_/ (__  ) /_/  __/ /  / __  / /_/ / /_/ /
/_/ /_/\____/____/\__/\___/_/  /_/ /_/\__,_/_.___/
    "#
    );
}
