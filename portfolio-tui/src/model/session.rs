//! 页面会话
//!
//! 每次导航都是一次 "整页加载"：新的文档、重新渲染的页面、
//! 新的页面切换控制器与新的侧边栏。

use portfolio_core::services::RenderOutcome;
use portfolio_core::{Document, InMemoryDocument, PageTransitions, ProximitySidebar};

use super::Page;

/// 侧边栏链接 ID 前缀
pub const SIDEBAR_LINK_PREFIX: &str = "sidebarLink-";
/// 首页卡片 ID 前缀
pub const CARD_PREFIX: &str = "sectorCard-";
/// 首页卡片容器
pub const CARDS_ID: &str = "sectorCards";

/// 侧边栏中的一条链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    pub id: String,
    pub label: String,
    pub href: String,
}

/// 当前页面会话
pub struct PageSession {
    pub page: Page,
    pub document: InMemoryDocument,
    pub transitions: PageTransitions,
    pub sidebar: ProximitySidebar,
    /// 详情页的渲染结果；首页为 `None`
    pub render: Option<RenderOutcome>,
}

impl PageSession {
    /// 是否显示 "未找到" 页面
    pub fn is_not_found(&self) -> bool {
        matches!(self.render, Some(RenderOutcome::NotFound))
    }

    /// 侧边栏链接（文档顺序）
    pub fn sidebar_links(&self) -> Vec<SidebarLink> {
        let Some(focusables) = self.sidebar.focusables() else {
            return Vec::new();
        };
        focusables
            .ids()
            .iter()
            .map(|id| SidebarLink {
                id: id.clone(),
                label: self.document.text_content(id).unwrap_or_default(),
                href: self
                    .document
                    .attribute(id, "href")
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect()
    }

    /// 链接地址
    pub fn href(&self, id: &str) -> Option<&str> {
        self.document.attribute(id, "href")
    }

    /// 首页卡片对应的作品 ID（文档顺序）
    pub fn card_sector_ids(&self) -> Vec<&str> {
        self.document
            .ids()
            .filter_map(|id| id.strip_prefix(CARD_PREFIX))
            .collect()
    }
}
