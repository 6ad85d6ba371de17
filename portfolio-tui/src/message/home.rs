//! 首页消息

/// 首页卡片列表消息
#[derive(Debug, Clone)]
pub enum HomeMessage {
    /// 选择上一张卡片
    SelectPrevious,
    /// 选择下一张卡片
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 打开选中的作品
    Open,
}
