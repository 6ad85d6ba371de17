//! 鼠标指针状态

/// 指针所处区域，用于把连续的移动事件翻译成进入/离开
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    /// 指针位于侧边栏面板内
    pub over_panel: bool,
    /// 指针位于 peek 按钮上
    pub over_peek: bool,
}
