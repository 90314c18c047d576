use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::SimulatedLatency;

/// 门户配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./hostel-data | 工作目录 (快照数据库、日志) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 控制台日志 |
/// | LOG_TO_FILE | false | 按天滚动的文件日志 |
/// | SIMULATED_LATENCY_MS | 1000 | 登录/注册模拟延迟基数 |
/// | SIMULATED_LATENCY_JITTER_MS | 1000 | 随机附加延迟上限 |
/// | SKIP_SIMULATED_LATENCY | false | 关闭模拟延迟 |
/// | TOTAL_ROOMS | 350 | 管理端统计的房间总数 |
/// | PERSIST_SNAPSHOT | false | 使用 redb 持久化快照 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/tmp/hostel SKIP_SIMULATED_LATENCY=true cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// 运行环境: development | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_to_file: bool,
    pub simulated_latency_ms: u64,
    pub simulated_latency_jitter_ms: u64,
    pub skip_simulated_latency: bool,
    /// 管理端 "可用房间" 统计的分母
    pub total_rooms: usize,
    /// true 时快照写入 `WORK_DIR/snapshot.redb`
    pub persist_snapshot: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./hostel-data".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_or("LOG_JSON", false),
            log_to_file: env_or("LOG_TO_FILE", false),
            simulated_latency_ms: env_or("SIMULATED_LATENCY_MS", 1000),
            simulated_latency_jitter_ms: env_or("SIMULATED_LATENCY_JITTER_MS", 1000),
            skip_simulated_latency: env_or("SKIP_SIMULATED_LATENCY", false),
            total_rooms: env_or("TOTAL_ROOMS", 350),
            persist_snapshot: env_or("PERSIST_SNAPSHOT", false),
        }
    }

    /// 使用自定义值覆盖部分配置
    pub fn with_overrides(work_dir: impl Into<String>, total_rooms: usize) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.total_rooms = total_rooms;
        config
    }

    /// 测试配置: 无延迟、内存快照，不读取环境变量
    pub fn for_tests() -> Self {
        Self {
            work_dir: std::env::temp_dir().join("hostel-portal-test").display().to_string(),
            environment: "test".into(),
            log_level: "debug".into(),
            log_json: false,
            log_to_file: false,
            simulated_latency_ms: 0,
            simulated_latency_jitter_ms: 0,
            skip_simulated_latency: true,
            total_rooms: 350,
            persist_snapshot: false,
        }
    }

    /// 登录/注册使用的模拟延迟
    pub fn latency(&self) -> SimulatedLatency {
        if self.skip_simulated_latency {
            return SimulatedLatency::Skip;
        }
        let base = Duration::from_millis(self.simulated_latency_ms);
        match self.simulated_latency_jitter_ms {
            0 => SimulatedLatency::Fixed(base),
            jitter => SimulatedLatency::Jittered {
                base,
                jitter: Duration::from_millis(jitter),
            },
        }
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.work_dir().join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_selection() {
        let mut config = Config::for_tests();
        assert!(matches!(config.latency(), SimulatedLatency::Skip));

        config.skip_simulated_latency = false;
        config.simulated_latency_ms = 200;
        assert!(matches!(
            config.latency(),
            SimulatedLatency::Fixed(d) if d == Duration::from_millis(200)
        ));

        config.simulated_latency_jitter_ms = 50;
        assert!(matches!(
            config.latency(),
            SimulatedLatency::Jittered { base, jitter }
                if base == Duration::from_millis(200) && jitter == Duration::from_millis(50)
        ));
    }

    #[test]
    fn test_log_dir_under_work_dir() {
        let mut config = Config::for_tests();
        config.work_dir = "/srv/hostel".into();
        assert_eq!(config.log_dir(), PathBuf::from("/srv/hostel/logs"));
    }

    #[test]
    fn test_overrides_replace_work_dir_and_total() {
        let config = Config::with_overrides("/srv/hostel", 120);
        assert_eq!(config.work_dir(), PathBuf::from("/srv/hostel"));
        assert_eq!(config.total_rooms, 120);
        assert_eq!(config.log_dir(), PathBuf::from("/srv/hostel/logs"));
    }
}
