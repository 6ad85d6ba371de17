//! Portfolio TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、目录、导航与页面加载 (`backend/`)
//!
//!
//! main.rs
//! Portfolio TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入缓存目录，不占用终端
//!     load config / catalog   // 失败时记录警告并回退默认值
//!     init_terminal()         // 初始化终端，得到 terminal: Terminal<...>
//!     model::App::new()       // 创建 APP 实例（打开首页）
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{load_catalog, AppConfig, ConfigService, LocalConfigService};
use i18n::{set_language, t, Language};
use portfolio_core::SectorCatalog;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 0. 日志（失败不影响运行）
    match init_logging() {
        Ok(path) => tracing::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {e:#}"),
    }

    // 1. 配置与目录
    let mut warnings = Vec::new();
    let config = LocalConfigService::new().load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring config file: {e:#}");
        warnings.push(e);
        AppConfig::default()
    });

    view::theme::set_theme(config.theme);
    match Language::from_code(&config.language) {
        Some(language) => {
            set_language(language);
            tracing::debug!("Language: {}", language.code());
        }
        None => tracing::warn!("Unknown language '{}', using en-US", config.language),
    }

    let catalog = load_catalog(&config).unwrap_or_else(|e| {
        tracing::warn!("Using built-in catalog: {e:#}");
        warnings.push(e);
        SectorCatalog::builtin()
    });

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例
    let mut app = model::App::new(config, catalog, terminal.get_frame().area());
    if !warnings.is_empty() {
        app.set_status(t().status_bar.config_warning);
    }

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Bye");

    // 6. 返回结果
    result
}
