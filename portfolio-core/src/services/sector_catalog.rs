//! 作品目录服务
//!
//! 固定的内存目录：作品 ID → 完整记录。读取路径宽松（查不到返回 `None`），
//! 写入路径严格（新增时校验必填字段）。

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::types::{MockupType, NewSector, Sector, SectorLinks, SectorSummary, SectorUpdate};

/// 作品目录
#[derive(Debug, Clone, Default)]
pub struct SectorCatalog {
    /// 按插入顺序保存
    sectors: Vec<Sector>,
}

impl SectorCatalog {
    /// 创建空目录
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建预置了全部作品的目录
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            sectors: builtin_sectors(),
        }
    }

    /// 从 JSON 数组加载目录，每一项按 `add_sector` 的规则校验
    pub fn from_json(json: &str) -> CoreResult<Self> {
        #[derive(serde::Deserialize)]
        struct Entry {
            id: String,
            #[serde(flatten)]
            draft: NewSector,
        }

        let entries: Vec<Entry> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for entry in entries {
            catalog.add_sector(&entry.id, entry.draft)?;
        }
        log::debug!("Loaded {} sectors from JSON", catalog.len());
        Ok(catalog)
    }

    /// 按 ID 获取作品
    #[must_use]
    pub fn get(&self, sector_id: &str) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.id == sector_id)
    }

    /// 获取全部作品
    #[must_use]
    pub fn all(&self) -> Vec<&Sector> {
        self.sectors.iter().collect()
    }

    /// 全部作品 ID
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.sectors.iter().map(|s| s.id.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// 按分类筛选
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Sector> {
        self.sectors
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// 按标签筛选
    #[must_use]
    pub fn by_tag(&self, tag: &str) -> Vec<&Sector> {
        self.sectors
            .iter()
            .filter(|s| s.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// 新增作品
    ///
    /// 缺失必填字段时返回 `MissingProperties`，列出全部缺失项。
    /// ID 已存在时原位替换。
    pub fn add_sector(&mut self, sector_id: &str, draft: NewSector) -> CoreResult<()> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            log::warn!("Rejected sector '{sector_id}': missing {}", missing.join(", "));
            return Err(CoreError::MissingProperties(missing));
        }
        if sector_id.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "sector id must not be empty".to_string(),
            ));
        }

        let sector = Sector {
            id: sector_id.to_string(),
            title: draft.title.unwrap_or_default(),
            subtitle: draft.subtitle.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            tags: draft.tags.unwrap_or_default(),
            category: draft.category.unwrap_or_default(),
            sector_image: draft.sector_image.unwrap_or_default(),
            mockup_type: draft.mockup_type.unwrap_or_default(),
            thumbnail_image: draft.thumbnail_image,
            status: draft.status,
            year: draft.year,
            duration: draft.duration,
            team: draft.team,
            technologies: draft.technologies,
            challenges: draft.challenges,
            solutions: draft.solutions,
            results: draft.results,
            links: draft.links,
            gallery: draft.gallery,
        };

        match self.sectors.iter_mut().find(|s| s.id == sector_id) {
            Some(existing) => *existing = sector,
            None => self.sectors.push(sector),
        }
        Ok(())
    }

    /// 更新作品（浅合并）
    pub fn update_sector(&mut self, sector_id: &str, update: SectorUpdate) -> CoreResult<()> {
        let sector = self
            .sectors
            .iter_mut()
            .find(|s| s.id == sector_id)
            .ok_or_else(|| CoreError::SectorNotFound(sector_id.to_string()))?;
        update.apply_to(sector);
        Ok(())
    }

    /// 首页卡片数据
    #[must_use]
    pub fn homepage_data(&self, sector_id: &str) -> Option<SectorSummary> {
        self.get(sector_id).map(Sector::summary)
    }

    /// 详情页数据
    #[must_use]
    pub fn detail_page_data(&self, sector_id: &str) -> Option<&Sector> {
        self.get(sector_id)
    }

    /// 全部分类（按首次出现顺序去重）
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.sectors
            .iter()
            .map(|s| s.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// 全部标签（按首次出现顺序去重）
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.sectors
            .iter()
            .flat_map(|s| s.tags.iter().map(String::as_str))
            .filter(|t| seen.insert(*t))
            .collect()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn placeholder_links(live: &str) -> SectorLinks {
    [("live", live), ("github", "#"), ("caseStudy", "#")]
        .into_iter()
        .collect()
}

/// 预置作品数据
fn builtin_sectors() -> Vec<Sector> {
    vec![
        Sector {
            id: "layerlens".to_string(),
            title: "LayerLens".to_string(),
            subtitle: "Design System & Navigation Tool".to_string(),
            description: "Introduces two features that simplify navigation and reduce cognitive load in complex, collaborative files.".to_string(),
            tags: strings(&["UX/UI Design", "UX Research", "Design Systems"]),
            category: "Design Tools".to_string(),
            sector_image: "layerlens-mockup".to_string(),
            mockup_type: MockupType::Image,
            thumbnail_image: Some("images/layerlens-thumbnail.svg".to_string()),
            status: "Completed".to_string(),
            year: "2024".to_string(),
            duration: "3 months".to_string(),
            team: "Solo Project".to_string(),
            technologies: strings(&["Figma", "React", "CSS3", "JavaScript"]),
            challenges: strings(&[
                "Reducing cognitive load in complex file structures",
                "Creating intuitive layer navigation",
                "Maintaining design consistency across teams",
            ]),
            solutions: strings(&[
                "Implemented hierarchical layer organization",
                "Created visual layer indicators",
                "Developed collaborative workflow improvements",
            ]),
            results: strings(&[
                "40% reduction in file navigation time",
                "Improved team collaboration efficiency",
                "Enhanced design system adoption",
            ]),
            links: placeholder_links("#"),
            gallery: strings(&["layerlens-1.jpg", "layerlens-2.jpg", "layerlens-3.jpg"]),
        },
        Sector {
            id: "hudson-wilder".to_string(),
            title: "Hudson Wilder".to_string(),
            subtitle: "E-commerce Platform".to_string(),
            description: "Brought a luxury glassware brand to life through immersive e-commerce design and seamless user experience.".to_string(),
            tags: strings(&["E-commerce", "Visual Design", "Brand Identity"]),
            category: "E-commerce".to_string(),
            sector_image: "hudson-wilder-mockup".to_string(),
            mockup_type: MockupType::Browser,
            thumbnail_image: None,
            status: "Live".to_string(),
            year: "2024".to_string(),
            duration: "4 months".to_string(),
            team: "Design Lead".to_string(),
            technologies: strings(&["Shopify", "Liquid", "CSS3", "JavaScript", "Figma"]),
            challenges: strings(&[
                "Creating luxury brand experience online",
                "Optimizing product showcase for glassware",
                "Implementing seamless checkout flow",
            ]),
            solutions: strings(&[
                "Designed immersive product galleries",
                "Created elegant product detail pages",
                "Optimized mobile shopping experience",
            ]),
            results: strings(&[
                "25% increase in conversion rate",
                "60% improvement in mobile usability",
                "Enhanced brand perception",
            ]),
            links: placeholder_links("https://hudsonwilder.com"),
            gallery: strings(&["hudson-1.jpg", "hudson-2.jpg", "hudson-3.jpg"]),
        },
        Sector {
            id: "neptune-studio".to_string(),
            title: "Neptune Studio".to_string(),
            subtitle: "Music Production Platform".to_string(),
            description: "Brought a music studio's creative vision to life through immersive web design and interactive audio experiences.".to_string(),
            tags: strings(&["Music", "Visual Design", "Interactive Design"]),
            category: "Creative Platforms".to_string(),
            sector_image: "neptune-studio-mockup".to_string(),
            mockup_type: MockupType::App,
            thumbnail_image: None,
            status: "In Development".to_string(),
            year: "2024".to_string(),
            duration: "6 months".to_string(),
            team: "Lead Designer".to_string(),
            technologies: strings(&["React", "Web Audio API", "Three.js", "CSS3"]),
            challenges: strings(&[
                "Creating immersive audio-visual experience",
                "Integrating real-time audio controls",
                "Designing for creative professionals",
            ]),
            solutions: strings(&[
                "Developed interactive audio interface",
                "Created 3D visualizations",
                "Implemented responsive design system",
            ]),
            results: strings(&[
                "Enhanced creative workflow",
                "Improved user engagement",
                "Streamlined music production process",
            ]),
            links: placeholder_links("#"),
            gallery: strings(&["neptune-1.jpg", "neptune-2.jpg", "neptune-3.jpg"]),
        },
        Sector {
            id: "eco-aid".to_string(),
            title: "Eco A.I.D".to_string(),
            subtitle: "Sustainable AI Framework".to_string(),
            description: "Developed a comprehensive framework for sustainable AI implementation in enterprise environments.".to_string(),
            tags: strings(&["AI/ML", "Sustainability", "Enterprise", "UX Research"]),
            category: "AI & Sustainability".to_string(),
            sector_image: "eco-aid-mockup".to_string(),
            mockup_type: MockupType::App,
            thumbnail_image: None,
            status: "Research Phase".to_string(),
            year: "2024".to_string(),
            duration: "8 months".to_string(),
            team: "Research Lead".to_string(),
            technologies: strings(&["Python", "TensorFlow", "React", "D3.js"]),
            challenges: strings(&[
                "Measuring AI environmental impact",
                "Creating actionable sustainability guidelines",
                "Balancing performance with efficiency",
            ]),
            solutions: strings(&[
                "Developed carbon footprint tracking",
                "Created optimization algorithms",
                "Built comprehensive reporting dashboard",
            ]),
            results: strings(&[
                "30% reduction in AI energy consumption",
                "Comprehensive sustainability metrics",
                "Industry adoption of framework",
            ]),
            links: placeholder_links("#"),
            gallery: strings(&["eco-1.jpg", "eco-2.jpg", "eco-3.jpg"]),
        },
    ]
}
