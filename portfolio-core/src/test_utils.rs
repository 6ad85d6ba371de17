//! 测试辅助模块
//!
//! 提供文档夹具和便捷的测试工厂方法。

use std::time::Duration;

use crate::services::regions;
use crate::traits::InMemoryDocument;
use crate::types::{MockupType, NewSector, SectorLinks};

/// 毫秒 → `Duration`
pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// 字段齐全的作品草稿
pub fn complete_draft() -> NewSector {
    let mut links = SectorLinks::new();
    links.insert("live", "https://example.com");
    links.insert("github", "#");

    NewSector {
        title: Some("Portfolio V2".into()),
        subtitle: Some("Rebuilt from scratch".into()),
        description: Some("A second take on the portfolio.".into()),
        tags: Some(vec!["Web".into(), "Design".into()]),
        category: Some("Web Development".into()),
        sector_image: Some("images/portfolio-v2.jpg".into()),
        mockup_type: Some(MockupType::Browser),
        thumbnail_image: None,
        status: "In Progress".into(),
        year: "2025".into(),
        duration: "2 months".into(),
        team: "Solo".into(),
        technologies: vec!["HTML".into(), "CSS".into()],
        challenges: vec!["Scope".into()],
        solutions: vec!["Iteration".into()],
        results: vec!["Shipped".into()],
        links,
        gallery: vec!["v2-1.jpg".into()],
    }
}

/// 包含全部详情页区域的文档
pub fn sector_page_document() -> InMemoryDocument {
    InMemoryDocument::new()
        .with_elements(regions::ALL)
        .with_meta_description("")
}

/// 侧边栏内的可聚焦链接（文档顺序）
pub const SIDEBAR_LINKS: [&str; 3] = ["sidebarLinkHome", "sidebarLinkWork", "sidebarLinkContact"];

/// 带侧边栏的文档：面板、peek 按钮以及面板外的主内容
pub fn sidebar_document() -> InMemoryDocument {
    let mut doc = InMemoryDocument::new()
        .with_element("proximitySidebar")
        .with_child("proximitySidebar", "sidebarNav", false);
    for id in SIDEBAR_LINKS {
        doc = doc.with_child("sidebarNav", id, true);
    }
    doc.with_element("sidebarPeek")
        .with_element("main")
        .with_child("main", "mainLink", true)
}
