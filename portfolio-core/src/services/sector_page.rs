//! 作品详情页渲染服务
//!
//! 从目录中读取一条记录，单向、整体地覆盖文档中固定 ID 的区域。
//! 不做差量比较；目标区域不存在时静默跳过。

use std::sync::Arc;

use crate::services::SectorCatalog;
use crate::traits::Document;
use crate::types::{
    BadgeKind, GalleryImage, LinkView, MockupType, MockupView, NotFoundView, RegionContent,
    Sector,
};

/// 详情页区域 ID
pub mod regions {
    pub const SECTOR_MOCKUP: &str = "sectorMockup";
    pub const SECTOR_CATEGORY: &str = "sectorCategory";
    pub const SECTOR_YEAR: &str = "sectorYear";
    pub const SECTOR_STATUS: &str = "sectorStatus";
    pub const SECTOR_TITLE: &str = "sectorTitle";
    pub const SECTOR_SUBTITLE: &str = "sectorSubtitle";
    pub const SECTOR_DESCRIPTION: &str = "sectorDescription";
    pub const SECTOR_TAGS: &str = "sectorTags";
    pub const PROJECT_DURATION: &str = "projectDuration";
    pub const PROJECT_TEAM: &str = "projectTeam";
    pub const PROJECT_TECHNOLOGIES: &str = "projectTechnologies";
    pub const PROJECT_LINKS: &str = "projectLinks";
    pub const PROJECT_CHALLENGES: &str = "projectChallenges";
    pub const PROJECT_SOLUTIONS: &str = "projectSolutions";
    pub const PROJECT_RESULTS: &str = "projectResults";
    pub const PROJECT_GALLERY: &str = "projectGallery";

    /// 全部区域，按页面自上而下的顺序
    pub const ALL: [&str; 16] = [
        SECTOR_MOCKUP,
        SECTOR_CATEGORY,
        SECTOR_YEAR,
        SECTOR_STATUS,
        SECTOR_TITLE,
        SECTOR_SUBTITLE,
        SECTOR_DESCRIPTION,
        SECTOR_TAGS,
        PROJECT_DURATION,
        PROJECT_TEAM,
        PROJECT_TECHNOLOGIES,
        PROJECT_LINKS,
        PROJECT_CHALLENGES,
        PROJECT_SOLUTIONS,
        PROJECT_RESULTS,
        PROJECT_GALLERY,
    ];
}

/// 图片缺省路径
const PLACEHOLDER_IMAGE: &str = "images/placeholder.svg";
/// 图库目录
const IMAGE_DIR: &str = "images";

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// 已渲染；`skipped` 为文档中缺失而被跳过的区域
    Rendered { skipped: Vec<&'static str> },
    /// 作品不存在，已显示 "未找到" 页面
    NotFound,
}

/// 作品详情页渲染器
pub struct SectorPage {
    catalog: Arc<SectorCatalog>,
    site_name: String,
}

impl SectorPage {
    /// 创建渲染器实例
    #[must_use]
    pub fn new(catalog: Arc<SectorCatalog>) -> Self {
        Self {
            catalog,
            site_name: "Rahul Nanduri Portfolio".to_string(),
        }
    }

    /// 设置标题后缀
    #[must_use]
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    /// 标题后缀
    #[must_use]
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// 渲染器持有的目录
    #[must_use]
    pub fn catalog(&self) -> &SectorCatalog {
        &self.catalog
    }

    /// 按作品 ID 初始化详情页
    pub fn init(&self, sector_id: &str, doc: &mut dyn Document) -> RenderOutcome {
        let Some(sector) = self.catalog.detail_page_data(sector_id) else {
            log::error!("Sector '{sector_id}' not found");
            Self::show_not_found(doc);
            return RenderOutcome::NotFound;
        };

        let skipped = self.render(sector, doc);
        if !skipped.is_empty() {
            log::debug!("Sector '{sector_id}' rendered, skipped regions: {skipped:?}");
        }
        RenderOutcome::Rendered { skipped }
    }

    /// 渲染一条记录，返回被跳过的区域
    pub fn render(&self, sector: &Sector, doc: &mut dyn Document) -> Vec<&'static str> {
        doc.set_title(&format!("{} - {}", sector.title, self.site_name));
        doc.set_meta_description(&sector.description);

        let mut skipped = Vec::new();
        for (id, content) in Self::region_contents(sector) {
            if !doc.set_content(id, content) {
                skipped.push(id);
            }
        }
        skipped
    }

    /// 显示 "未找到" 页面
    pub fn show_not_found(doc: &mut dyn Document) {
        doc.replace_body(RegionContent::NotFound(NotFoundView::default()));
    }

    /// 记录 → 各区域内容
    fn region_contents(sector: &Sector) -> Vec<(&'static str, RegionContent)> {
        use regions::{
            PROJECT_CHALLENGES, PROJECT_DURATION, PROJECT_GALLERY, PROJECT_LINKS,
            PROJECT_RESULTS, PROJECT_SOLUTIONS, PROJECT_TEAM, PROJECT_TECHNOLOGIES,
            SECTOR_CATEGORY, SECTOR_DESCRIPTION, SECTOR_MOCKUP, SECTOR_STATUS, SECTOR_SUBTITLE,
            SECTOR_TAGS, SECTOR_TITLE, SECTOR_YEAR,
        };

        let text = |value: &str| RegionContent::Text(value.to_string());

        vec![
            (SECTOR_MOCKUP, RegionContent::Mockup(mockup_view(sector))),
            (SECTOR_CATEGORY, text(&sector.category)),
            (SECTOR_YEAR, text(&sector.year)),
            (SECTOR_STATUS, text(&sector.status)),
            (SECTOR_TITLE, text(&sector.title)),
            (SECTOR_SUBTITLE, text(&sector.subtitle)),
            (SECTOR_DESCRIPTION, text(&sector.description)),
            (
                SECTOR_TAGS,
                RegionContent::Badges {
                    kind: BadgeKind::SectorTag,
                    items: sector.tags.clone(),
                },
            ),
            (PROJECT_DURATION, text(&sector.duration)),
            (PROJECT_TEAM, text(&sector.team)),
            (
                PROJECT_TECHNOLOGIES,
                RegionContent::Badges {
                    kind: BadgeKind::TechTag,
                    items: sector.technologies.clone(),
                },
            ),
            (PROJECT_LINKS, links_content(sector)),
            (PROJECT_CHALLENGES, RegionContent::List(sector.challenges.clone())),
            (PROJECT_SOLUTIONS, RegionContent::List(sector.solutions.clone())),
            (PROJECT_RESULTS, RegionContent::List(sector.results.clone())),
            (PROJECT_GALLERY, RegionContent::Gallery(gallery(sector))),
        ]
    }
}

fn mockup_view(sector: &Sector) -> MockupView {
    let image = match sector.mockup_type {
        MockupType::Image => Some(
            sector
                .thumbnail_image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        ),
        _ => None,
    };
    MockupView {
        kind: sector.mockup_type,
        title: sector.title.clone(),
        subtitle: sector.subtitle.clone(),
        image,
    }
}

fn links_content(sector: &Sector) -> RegionContent {
    let links: Vec<LinkView> = sector
        .links
        .renderable()
        .map(|link| LinkView {
            label: link.label(),
            href: link.url.clone(),
        })
        .collect();

    if links.is_empty() {
        RegionContent::Note("No links available".to_string())
    } else {
        RegionContent::Links(links)
    }
}

fn gallery(sector: &Sector) -> Vec<GalleryImage> {
    sector
        .gallery
        .iter()
        .map(|file| GalleryImage {
            src: format!("{IMAGE_DIR}/{file}"),
            alt: format!("{} - Gallery Image", sector.title),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sector_page_document;
    use crate::traits::InMemoryDocument;

    fn renderer() -> SectorPage {
        SectorPage::new(Arc::new(SectorCatalog::builtin()))
    }

    #[test]
    fn renders_every_region() {
        let mut doc = sector_page_document();
        let outcome = renderer().init("hudson-wilder", &mut doc);

        assert_eq!(outcome, RenderOutcome::Rendered { skipped: vec![] });
        assert_eq!(doc.title(), "Hudson Wilder - Rahul Nanduri Portfolio");
        assert_eq!(doc.text_content(regions::SECTOR_STATUS).as_deref(), Some("Live"));
        assert_eq!(
            doc.text_content(regions::PROJECT_TECHNOLOGIES).as_deref(),
            Some("Shopify Liquid CSS3 JavaScript Figma")
        );
        assert!(doc.meta_description().unwrap().starts_with("Brought a luxury"));
    }

    #[test]
    fn placeholder_links_are_dropped() {
        let mut doc = sector_page_document();
        renderer().init("hudson-wilder", &mut doc);

        match doc.content(regions::PROJECT_LINKS) {
            Some(RegionContent::Links(links)) => {
                assert_eq!(links.len(), 1);
                assert_eq!(links[0].label, "Live");
                assert_eq!(links[0].href, "https://hudsonwilder.com");
            }
            other => panic!("unexpected links region: {other:?}"),
        }
    }

    #[test]
    fn no_renderable_links_shows_note() {
        let mut doc = sector_page_document();
        renderer().init("layerlens", &mut doc);

        assert_eq!(
            doc.content(regions::PROJECT_LINKS),
            Some(&RegionContent::Note("No links available".into()))
        );
    }

    #[test]
    fn gallery_paths_are_prefixed() {
        let mut doc = sector_page_document();
        renderer().init("eco-aid", &mut doc);

        match doc.content(regions::PROJECT_GALLERY) {
            Some(RegionContent::Gallery(images)) => {
                assert_eq!(images[0].src, "images/eco-1.jpg");
                assert_eq!(images[0].alt, "Eco A.I.D - Gallery Image");
            }
            other => panic!("unexpected gallery region: {other:?}"),
        }
    }

    #[test]
    fn image_mockup_falls_back_to_placeholder() {
        let mut catalog = SectorCatalog::builtin();
        catalog
            .update_sector(
                "layerlens",
                crate::types::SectorUpdate {
                    thumbnail_image: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();

        let mut doc = sector_page_document();
        SectorPage::new(Arc::new(catalog)).init("layerlens", &mut doc);

        match doc.content(regions::SECTOR_MOCKUP) {
            Some(RegionContent::Mockup(view)) => {
                assert_eq!(view.image.as_deref(), Some(PLACEHOLDER_IMAGE));
            }
            other => panic!("unexpected mockup region: {other:?}"),
        }
    }

    #[test]
    fn missing_regions_are_skipped() {
        let mut doc = InMemoryDocument::new()
            .with_element(regions::SECTOR_TITLE)
            .with_element(regions::PROJECT_RESULTS);

        let outcome = renderer().init("neptune-studio", &mut doc);

        match outcome {
            RenderOutcome::Rendered { skipped } => {
                assert_eq!(skipped.len(), regions::ALL.len() - 2);
                assert!(!skipped.contains(&regions::SECTOR_TITLE));
            }
            RenderOutcome::NotFound => panic!("sector should exist"),
        }
        assert_eq!(doc.text_content(regions::SECTOR_TITLE).as_deref(), Some("Neptune Studio"));
    }

    #[test]
    fn unknown_sector_shows_not_found_view() {
        let mut doc = sector_page_document();
        let outcome = renderer().init("nonexistent", &mut doc);

        assert_eq!(outcome, RenderOutcome::NotFound);
        assert!(!doc.has_element(regions::SECTOR_TITLE));
        assert!(matches!(doc.body(), Some(RegionContent::NotFound(_))));
    }

    #[test]
    fn custom_site_name_is_used_in_title() {
        let mut doc = sector_page_document();
        renderer()
            .with_site_name("Studio")
            .init("eco-aid", &mut doc);
        assert_eq!(doc.title(), "Eco A.I.D - Studio");
    }
}
