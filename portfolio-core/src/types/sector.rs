//! 作品（Sector）类型定义

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 展示样机类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MockupType {
    Browser,
    App,
    Mobile,
    Image,
    #[default]
    Custom,
}

impl MockupType {
    /// 获取类型标识（与 JSON 中的取值一致）
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::App => "app",
            Self::Mobile => "mobile",
            Self::Image => "image",
            Self::Custom => "custom",
        }
    }
}

/// 单条外链
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorLink {
    /// 链接键（如 `live`、`caseStudy`）
    pub key: String,
    /// 目标 URL，`#` 或空串表示占位
    pub url: String,
}

impl SectorLink {
    #[must_use]
    pub fn new(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
        }
    }

    /// 是否为占位链接（不参与渲染）
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.url.is_empty() || self.url == "#"
    }

    /// 由链接键生成显示标签：首字母大写，内部大写字母前插入空格
    ///
    /// `caseStudy` → `Case Study`
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = String::with_capacity(self.key.len() + 4);
        for (i, ch) in self.key.chars().enumerate() {
            if i == 0 {
                label.extend(ch.to_uppercase());
            } else {
                if ch.is_ascii_uppercase() {
                    label.push(' ');
                }
                label.push(ch);
            }
        }
        label
    }
}

/// 有序的外链集合
///
/// JSON 形式为对象（`{"live": "...", "github": "#"}`），保持键的书写顺序。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectorLinks(Vec<SectorLink>);

impl SectorLinks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置链接；已存在的键原位替换
    pub fn insert(&mut self, key: impl Into<String>, url: impl Into<String>) {
        let key = key.into();
        let url = url.into();
        if let Some(existing) = self.0.iter_mut().find(|link| link.key == key) {
            existing.url = url;
        } else {
            self.0.push(SectorLink { key, url });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectorLink> {
        self.0.iter()
    }

    /// 可渲染的链接（排除占位）
    pub fn renderable(&self) -> impl Iterator<Item = &SectorLink> {
        self.0.iter().filter(|link| !link.is_placeholder())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|link| link.key == key)
            .map(|link| link.url.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SectorLinks {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut links = Self::new();
        for (key, url) in iter {
            links.insert(key, url);
        }
        links
    }
}

impl Serialize for SectorLinks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for link in &self.0 {
            map.serialize_entry(&link.key, &link.url)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectorLinks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinksVisitor;

        impl<'de> Visitor<'de> for LinksVisitor {
            type Value = SectorLinks;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of link labels to URLs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut links = SectorLinks::new();
                while let Some((key, url)) = access.next_entry::<String, String>()? {
                    links.insert(key, url);
                }
                Ok(links)
            }
        }

        deserializer.deserialize_map(LinksVisitor)
    }
}

/// 作品完整记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: String,
    /// 样式类名（如 `layerlens-mockup`）
    pub sector_image: String,
    pub mockup_type: MockupType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub links: SectorLinks,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl Sector {
    /// 首页卡片所需的精简数据
    #[must_use]
    pub fn summary(&self) -> SectorSummary {
        SectorSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            sector_image: self.sector_image.clone(),
            mockup_type: self.mockup_type,
            category: self.category.clone(),
        }
    }

    /// 详情页地址（`<id>.html`）
    #[must_use]
    pub fn page_url(&self) -> String {
        format!("{}.html", self.id)
    }
}

/// 首页展示数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSummary {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<String>,
    pub sector_image: String,
    pub mockup_type: MockupType,
    pub category: String,
}

/// 新增作品的草稿
///
/// 必填字段为 `Option`，缺失或为空时在 `SectorCatalog::add_sector` 中报错。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSector {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub sector_image: Option<String>,
    pub mockup_type: Option<MockupType>,
    #[serde(default)]
    pub thumbnail_image: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub links: SectorLinks,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl NewSector {
    /// 必填字段名（camelCase，与校验报错顺序一致）
    pub const REQUIRED: [&'static str; 7] = [
        "title",
        "subtitle",
        "description",
        "tags",
        "category",
        "sectorImage",
        "mockupType",
    ];

    /// 列出缺失的必填字段
    #[must_use]
    pub fn missing_fields(&self) -> Vec<String> {
        fn blank(value: Option<&String>) -> bool {
            value.is_none_or(String::is_empty)
        }

        let present = [
            !blank(self.title.as_ref()),
            !blank(self.subtitle.as_ref()),
            !blank(self.description.as_ref()),
            self.tags.as_ref().is_some_and(|tags| !tags.is_empty()),
            !blank(self.category.as_ref()),
            !blank(self.sector_image.as_ref()),
            self.mockup_type.is_some(),
        ];

        Self::REQUIRED
            .iter()
            .zip(present)
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| (*name).to_string())
            .collect()
    }
}

/// 作品部分更新（浅合并）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mockup_type: Option<MockupType>,
    /// `Some(None)` 清除缩略图
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<SectorLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
}

impl SectorUpdate {
    /// 将更新应用到记录上（仅覆盖提供的字段）
    pub fn apply_to(self, sector: &mut Sector) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    sector.$field = value;
                })*
            };
        }

        merge!(
            title,
            subtitle,
            description,
            tags,
            category,
            sector_image,
            mockup_type,
            thumbnail_image,
            status,
            year,
            duration,
            team,
            technologies,
            challenges,
            solutions,
            results,
            links,
            gallery,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_label_splits_camel_case() {
        assert_eq!(SectorLink::new("caseStudy", "#").label(), "Case Study");
        assert_eq!(SectorLink::new("live", "#").label(), "Live");
        assert_eq!(SectorLink::new("github", "#").label(), "Github");
        assert_eq!(SectorLink::new("demoÉtape", "#").label(), "DemoÉtape");
    }

    #[test]
    fn placeholder_links_are_not_renderable() {
        let links: SectorLinks = [
            ("live", "https://hudsonwilder.com"),
            ("github", "#"),
            ("caseStudy", ""),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = links.renderable().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["live"]);
    }

    #[test]
    fn links_keep_json_order() {
        let links: SectorLinks =
            serde_json::from_str(r#"{"live":"a","github":"b","caseStudy":"c"}"#).unwrap();
        let keys: Vec<_> = links.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["live", "github", "caseStudy"]);

        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(json, r#"{"live":"a","github":"b","caseStudy":"c"}"#);
    }

    #[test]
    fn missing_fields_reports_blank_and_absent() {
        let draft = NewSector {
            title: Some("Title".into()),
            subtitle: Some(String::new()),
            description: Some("desc".into()),
            tags: Some(vec![]),
            category: None,
            sector_image: Some("x-mockup".into()),
            mockup_type: Some(MockupType::App),
            ..NewSector::default()
        };
        assert_eq!(draft.missing_fields(), vec!["subtitle", "tags", "category"]);
    }

    #[test]
    fn whitespace_only_value_counts_as_present() {
        let draft = NewSector {
            title: Some("  ".into()),
            subtitle: Some("Sub".into()),
            description: Some("desc".into()),
            tags: Some(vec!["tag".into()]),
            category: Some("cat".into()),
            sector_image: Some("x-mockup".into()),
            mockup_type: Some(MockupType::App),
            ..NewSector::default()
        };
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn mockup_type_uses_lowercase_names() {
        let t: MockupType = serde_json::from_str("\"browser\"").unwrap();
        assert_eq!(t, MockupType::Browser);
        assert_eq!(MockupType::Mobile.as_str(), "mobile");
    }
}
