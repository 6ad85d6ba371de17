//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局 + 屏幕区域（命中测试共用）
//!         mod theme;          // 主题颜色
//!         mod components;     // 状态栏、侧边栏、切换遮罩、帮助
//!         mod pages;          // 首页、详情页、"未找到" 页面
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 绘制顺序
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     标题栏（文档标题 + peek 按钮）
//!       → 页面内容
//!       → 状态栏
//!       → 侧边栏（按动画进度滑入 / 滑出）
//!       → 页面切换遮罩（按 overlay_progress 展开）
//!       → 帮助
//!
//!     动画进度都由 core 按 app.now 计算，View 层只负责换算成列宽。
//!

pub mod components;
pub mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
