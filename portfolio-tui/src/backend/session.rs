//! 页面加载
//!
//! 根据页面构建文档骨架，渲染内容，再挂载页面切换控制器与侧边栏。

use portfolio_core::services::regions;
use portfolio_core::sidebar::{HostCapabilities, SidebarElements};
use portfolio_core::types::RegionContent;
use portfolio_core::{
    Document, InMemoryDocument, PageTransitions, ProximitySidebar, SectorCatalog, SectorPage,
};

use crate::backend::AppConfig;
use crate::i18n::t;
use crate::model::{Page, PageSession, CARDS_ID, CARD_PREFIX, SIDEBAR_LINK_PREFIX};

/// 加载页面，返回全新的会话
pub fn open_page(
    page: Page,
    renderer: &SectorPage,
    config: &AppConfig,
    capabilities: HostCapabilities,
) -> PageSession {
    let elements = SidebarElements::default();
    let mut document = page_skeleton(renderer.catalog(), &elements);

    let render = match &page {
        Page::Home => {
            document = with_cards(document, renderer.catalog());
            document.set_title(renderer.site_name());
            None
        }
        Page::Sector(id) => {
            document = document
                .with_elements(regions::ALL)
                .with_meta_description("");
            Some(renderer.init(id, &mut document))
        }
    };

    let transitions = PageTransitions::attach(&mut document, config.transition.clone());
    let sidebar = ProximitySidebar::attach(&mut document, elements, &config.sidebar, capabilities);

    tracing::debug!("Opened {} ({})", page.url(), document.title());

    PageSession {
        page,
        document,
        transitions,
        sidebar,
        render,
    }
}

/// 所有页面共有的部分：侧边栏面板、链接与 peek 按钮
fn page_skeleton(catalog: &SectorCatalog, elements: &SidebarElements) -> InMemoryDocument {
    let home_id = format!("{SIDEBAR_LINK_PREFIX}home");
    let mut links = vec![(home_id, t().sidebar.home.to_string(), "index.html".to_string())];
    links.extend(catalog.all().into_iter().map(|sector| {
        (
            format!("{SIDEBAR_LINK_PREFIX}{}", sector.id),
            sector.title.clone(),
            sector.page_url(),
        )
    }));

    let mut document = InMemoryDocument::new().with_element(&elements.panel);
    for (id, _, _) in &links {
        document = document.with_child(&elements.panel, id, true);
    }
    document = document.with_element(&elements.peek_button);

    for (id, label, href) in links {
        document.set_content(&id, RegionContent::Text(label));
        document.set_attribute(&id, "href", &href);
    }
    document
}

/// 首页卡片
fn with_cards(mut document: InMemoryDocument, catalog: &SectorCatalog) -> InMemoryDocument {
    document = document.with_element(CARDS_ID);
    let ids: Vec<String> = catalog.ids().into_iter().map(str::to_string).collect();
    for id in &ids {
        document = document.with_child(CARDS_ID, &format!("{CARD_PREFIX}{id}"), false);
    }
    for id in &ids {
        document.set_attribute(&format!("{CARD_PREFIX}{id}"), "href", &format!("#{id}"));
    }
    document
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use portfolio_core::sidebar::SidebarPhase;

    use super::*;

    fn renderer() -> SectorPage {
        SectorPage::new(Arc::new(SectorCatalog::builtin()))
    }

    #[test]
    fn home_page_has_cards_and_sidebar() {
        let session = open_page(
            Page::Home,
            &renderer(),
            &AppConfig::default(),
            HostCapabilities::default(),
        );

        assert_eq!(
            session.card_sector_ids(),
            vec!["layerlens", "hudson-wilder", "neptune-studio", "eco-aid"]
        );
        assert_eq!(session.href("sectorCard-eco-aid"), Some("#eco-aid"));
        assert_eq!(session.sidebar.phase(), Some(SidebarPhase::Hidden));

        let links = session.sidebar_links();
        assert_eq!(links.len(), 5);
        assert_eq!(links[0].href, "index.html");
        assert_eq!(links[1].href, "layerlens.html");
        assert_eq!(links[1].label, "LayerLens");
    }

    #[test]
    fn sector_page_is_rendered() {
        let session = open_page(
            Page::Sector("hudson-wilder".into()),
            &renderer(),
            &AppConfig::default(),
            HostCapabilities::default(),
        );

        assert!(!session.is_not_found());
        assert_eq!(session.document.title(), "Hudson Wilder - Rahul Nanduri Portfolio");
        assert!(session.card_sector_ids().is_empty());
        assert!(!session.sidebar.is_inert());
    }

    #[test]
    fn unknown_sector_replaces_page_and_leaves_sidebar_inert() {
        let session = open_page(
            Page::Sector("nonexistent".into()),
            &renderer(),
            &AppConfig::default(),
            HostCapabilities::default(),
        );

        assert!(session.is_not_found());
        assert!(session.sidebar.is_inert());
        assert!(session.sidebar_links().is_empty());
    }
}
