//! 应用主消息枚举

use super::{ContentMessage, HomeMessage, PointerMessage, SidebarMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 推进计时器（主循环每轮发送）
    Tick,

    /// 首页相关消息
    Home(HomeMessage),

    /// 详情页内容相关消息
    Content(ContentMessage),

    /// 侧边栏相关消息
    Sidebar(SidebarMessage),

    /// 鼠标相关消息
    Pointer(PointerMessage),

    /// 返回首页（带页面切换动画）
    GoBack,

    /// 历史后退（Alt+←），相当于浏览器的后退按钮
    HistoryBack,

    /// 显示 / 隐藏帮助
    ToggleHelp,

    /// 终端尺寸变化
    Resized { width: u16, height: u16 },

    /// 终端获得 / 失去焦点
    FocusChanged(bool),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
