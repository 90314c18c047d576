//! Logging Infrastructure
//!
//! Console output (pretty or JSON) plus, when a log directory is given,
//! daily rotating files:
//! - `app/app.YYYY-MM-DD` for everything except the `security` target
//! - `security/security.YYYY-MM-DD` for `security_log!` events

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, filter::filter_fn, fmt, prelude::*};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// `RUST_LOG` wins over the configured level when set
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the logging system
///
/// Calling this twice is an error (the global subscriber is already
/// installed), which callers in tests may ignore.
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// hostel_portal::utils::logger::init_logger("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let mut layers = vec![console_layer(level, json_format)];
    if let Some(dir) = log_dir {
        layers.extend(file_layers(level, dir, json_format)?);
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

fn console_layer(level: &str, json_format: bool) -> BoxedLayer {
    if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(level_filter(level))
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(level_filter(level))
            .boxed()
    }
}

fn file_layers(level: &str, log_dir: &Path, json_format: bool) -> anyhow::Result<Vec<BoxedLayer>> {
    let app_log_dir = log_dir.join("app");
    let security_log_dir = log_dir.join("security");
    fs::create_dir_all(&app_log_dir)?;
    fs::create_dir_all(&security_log_dir)?;

    let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
    let security_log = RollingFileAppender::new(Rotation::DAILY, security_log_dir, "security");

    let app_only = filter_fn(|meta| meta.target() != "security");
    let security_only = filter_fn(|meta| meta.target() == "security");

    let layers = if json_format {
        vec![
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(app_only)
                .with_filter(level_filter(level))
                .boxed(),
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(security_log))
                .with_filter(security_only)
                .boxed(),
        ]
    } else {
        vec![
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(app_only)
                .with_filter(level_filter(level))
                .boxed(),
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(security_log))
                .with_filter(security_only)
                .boxed(),
        ]
    };

    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_layers_create_directories() {
        let dir = tempfile::tempdir().unwrap();
        let layers = file_layers("info", dir.path(), false).unwrap();
        assert_eq!(layers.len(), 2);
        assert!(dir.path().join("app").is_dir());
        assert!(dir.path().join("security").is_dir());
    }
}
