//! 配置服务
//!
//! 配置文件为只读：缺失时使用默认值，格式错误时由调用方记录警告后回退默认值。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use portfolio_core::services::TransitionConfig;
use portfolio_core::sidebar::SidebarOptions;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 获取配置目录路径
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub theme: Theme,
    /// BCP 47 语言代码
    pub language: String,
    /// 侧边栏选项（浅合并到默认值上）
    pub sidebar: SidebarOptions,
    pub transition: TransitionConfig,
    /// 自定义作品目录（JSON），缺省使用内置目录
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sectors: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            sidebar: SidebarOptions::default(),
            transition: TransitionConfig::default(),
            sectors: None,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认路径 `<config_dir>/portfolio-tui/config.json`
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;

        tracing::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "portfolio-tui-{}-{name}",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let service = LocalConfigService::with_path("/nonexistent/portfolio-tui/config.json");
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_is_merged_over_defaults() {
        let path = temp_file(
            "partial.json",
            r#"{"theme": "light", "sidebar": {"hideDelay": 500}, "transition": {"duration": 250}}"#,
        );
        let config = LocalConfigService::with_path(&path).load().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, "en-US");
        assert_eq!(config.sidebar.hide_delay, Some(Duration::from_millis(500)));
        assert_eq!(config.transition.duration, Duration::from_millis(250));
        assert_eq!(config.transition.home_url, "index.html");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_file("broken.json", "{ not json");
        let result = LocalConfigService::with_path(&path).load();
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }
}
