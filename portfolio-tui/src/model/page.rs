//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页（作品卡片列表）
    #[default]
    Home,
    /// 作品详情页；ID 不存在时显示 "未找到"
    Sector(String),
}

impl Page {
    /// 页面对应的文档地址
    pub fn url(&self) -> String {
        match self {
            Page::Home => "index.html".to_string(),
            Page::Sector(id) => format!("{id}.html"),
        }
    }

    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::Sector(_))
    }
}
