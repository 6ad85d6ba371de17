//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责与 portfolio-core 打交道。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（只读 JSON）
//!         mod catalog_service;    // 作品目录（内置或 JSON 文件）
//!         mod navigator;          // 宿主导航器（实现 core 的 Navigator）
//!         mod session;            // 页面加载（文档骨架 + 渲染 + 挂载组件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、启动
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/main.rs 中：
//!
//!         let config = LocalConfigService::new().load()      // 失败时警告并回退默认
//!         let catalog = load_catalog(&config)                // 失败时警告并回退内置目录
//!         let app = App::new(config, catalog, viewport)      // 打开首页会话
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、导航
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     PageTransitions::tick(now, doc, &mut navigator)
//!         └─ 遮罩完全展开后调用 navigator.navigate(url)
//!               └─ HostNavigator 记录目标页面（pending）
//!
//!     主循环随后取走 pending 页面，调用 open_page() 重新加载：
//!         · 新文档（侧边栏面板、链接、peek 按钮、页面区域）
//!         · SectorPage::init() 渲染详情页（或 "未找到" 页面）
//!         · 新的 PageTransitions 与 ProximitySidebar
//!

mod catalog_service;
mod config_service;
mod navigator;
mod session;

pub use catalog_service::load_catalog;
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use navigator::HostNavigator;
pub use session::open_page;
