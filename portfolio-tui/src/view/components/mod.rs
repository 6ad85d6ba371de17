//! UI 组件
//!
//! 页面之上的公共部分：状态栏、侧边栏、切换遮罩与帮助。

pub mod help;
pub mod overlay;
pub mod sidebar;
pub mod statusbar;
