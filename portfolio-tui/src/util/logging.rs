//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入缓存目录下的文件：
//! `<cache_dir>/portfolio-tui/portfolio-tui.log`。
//! 级别由环境变量 `PORTFOLIO_LOG` 控制（EnvFilter 语法），默认 `info`。

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志级别环境变量
pub const LOG_ENV: &str = "PORTFOLIO_LOG";

/// 日志文件路径
pub fn log_file_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("portfolio-tui")
        .join("portfolio-tui.log")
}

/// 初始化 tracing（同时接管 core 的 `log` 记录）
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(path)
}
