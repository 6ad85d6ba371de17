//! 详情页内容消息

/// 详情页滚动
#[derive(Debug, Clone)]
pub enum ContentMessage {
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
}
