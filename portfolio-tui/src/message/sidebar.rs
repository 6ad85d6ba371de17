//! 侧边栏消息

use portfolio_core::sidebar::KeyInput;

/// 侧边栏消息
#[derive(Debug, Clone)]
pub enum SidebarMessage {
    /// 交给侧边栏的按键（Alt+s、Esc、Tab）
    Key(KeyInput),
    /// 焦点移到下一条链接
    FocusNext,
    /// 焦点移到上一条链接
    FocusPrevious,
    /// 打开当前聚焦的链接
    Activate,
}
