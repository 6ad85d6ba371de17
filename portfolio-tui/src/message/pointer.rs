//! 鼠标消息
//!
//! 坐标为终端单元格坐标，由 update 层换算成像素后交给侧边栏。

#[derive(Debug, Clone)]
pub enum PointerMessage {
    /// 指针移动（含拖动）
    Moved { column: u16, row: u16 },
    /// 左键按下
    Clicked { column: u16, row: u16 },
}
