//! 页面区域内容
//!
//! 渲染器写入 `Document` 的内容单元。每种内容既能输出 HTML（Web 宿主），
//! 也能输出纯文本（终端宿主、测试断言）。

use serde::{Deserialize, Serialize};

use super::MockupType;
use crate::utils::markup::escape;

/// 徽章样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BadgeKind {
    /// 作品标签（`sector-tag`）
    SectorTag,
    /// 技术栈（`tech-tag`）
    TechTag,
}

impl BadgeKind {
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::SectorTag => "sector-tag",
            Self::TechTag => "tech-tag",
        }
    }
}

/// 渲染后的外链
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

/// 图库中的一张图片
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// 样机展示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockupView {
    pub kind: MockupType,
    pub title: String,
    pub subtitle: String,
    /// 仅 `Image` 类型使用
    pub image: Option<String>,
}

/// "未找到" 页面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundView {
    pub heading: String,
    pub message: String,
    pub back_href: String,
    pub back_label: String,
}

impl Default for NotFoundView {
    fn default() -> Self {
        Self {
            heading: "Sector Not Found".to_string(),
            message: "The requested sector could not be found.".to_string(),
            back_href: "index.html".to_string(),
            back_label: "Back to Portfolio".to_string(),
        }
    }
}

/// 区域内容
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum RegionContent {
    #[default]
    Empty,
    Text(String),
    Badges {
        kind: BadgeKind,
        items: Vec<String>,
    },
    List(Vec<String>),
    Links(Vec<LinkView>),
    /// 弱化提示（如 "No links available"）
    Note(String),
    Gallery(Vec<GalleryImage>),
    Mockup(MockupView),
    NotFound(NotFoundView),
}

impl RegionContent {
    /// 纯文本内容，相当于 DOM 的 `textContent`
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) | Self::Note(text) => text.clone(),
            Self::Badges { items, .. } => items.join(" "),
            Self::List(items) => items.join("\n"),
            Self::Links(links) => links
                .iter()
                .map(|link| link.label.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Self::Gallery(images) => images
                .iter()
                .map(|image| image.alt.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Mockup(mockup) => format!("{}\n{}", mockup.title, mockup.subtitle),
            Self::NotFound(view) => {
                format!("{}\n{}\n{}", view.heading, view.message, view.back_label)
            }
        }
    }

    /// HTML 片段，相当于 `innerHTML`
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => escape(text),
            Self::Note(text) => format!(r#"<p style="color: #999;">{}</p>"#, escape(text)),
            Self::Badges { kind, items } => items
                .iter()
                .map(|item| format!(r#"<span class="{}">{}</span>"#, kind.class_name(), escape(item)))
                .collect(),
            Self::List(items) => items
                .iter()
                .map(|item| format!("<li>{}</li>", escape(item)))
                .collect(),
            Self::Links(links) => links
                .iter()
                .map(|link| {
                    format!(
                        r#"<a href="{}" class="project-link" target="_blank">{}</a>"#,
                        escape(&link.href),
                        escape(&link.label)
                    )
                })
                .collect(),
            Self::Gallery(images) => images
                .iter()
                .map(|image| {
                    format!(
                        r#"<div class="gallery-item"><img src="{}" alt="{}" class="gallery-image"></div>"#,
                        escape(&image.src),
                        escape(&image.alt)
                    )
                })
                .collect(),
            Self::Mockup(mockup) => mockup_html(mockup),
            Self::NotFound(view) => format!(
                r#"<div class="sector-not-found"><h1>{}</h1><p>{}</p><a href="{}">{}</a></div>"#,
                escape(&view.heading),
                escape(&view.message),
                escape(&view.back_href),
                escape(&view.back_label)
            ),
        }
    }
}

fn mockup_html(mockup: &MockupView) -> String {
    let title = escape(&mockup.title);
    let subtitle = escape(&mockup.subtitle);
    let dots = "<span></span><span></span><span></span>";

    match mockup.kind {
        MockupType::Browser => format!(
            r#"<div class="mockup-browser"><div class="browser-header"><div class="browser-dots">{dots}</div></div><div class="browser-content"><h3>{title}</h3><p>{subtitle}</p></div></div>"#
        ),
        MockupType::App => format!(
            r#"<div class="mockup-app"><div class="app-header"><div class="app-dots">{dots}</div></div><div class="app-content"><h3>{title}</h3><button>{subtitle}</button></div></div>"#
        ),
        MockupType::Mobile => format!(
            r#"<div class="mockup-mobile"><div class="mobile-screen"><div class="mobile-content"><h4>{title}</h4><p>{subtitle}</p></div></div></div>"#
        ),
        MockupType::Image => {
            let src = escape(mockup.image.as_deref().unwrap_or_default());
            format!(
                r#"<div class="mockup-image"><img src="{src}" alt="{title} - Thumbnail" class="thumbnail-image"></div>"#
            )
        }
        MockupType::Custom => format!(
            r#"<div class="mockup-custom"><div><h3>{title}</h3><p>{subtitle}</p></div></div>"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_render_with_kind_class() {
        let content = RegionContent::Badges {
            kind: BadgeKind::TechTag,
            items: vec!["Figma".into(), "React".into()],
        };
        assert_eq!(
            content.to_html(),
            r#"<span class="tech-tag">Figma</span><span class="tech-tag">React</span>"#
        );
        assert_eq!(content.text_content(), "Figma React");
    }

    #[test]
    fn text_is_escaped_in_html() {
        let content = RegionContent::List(vec!["A & B <c>".into()]);
        assert_eq!(content.to_html(), "<li>A &amp; B &lt;c&gt;</li>");
        assert_eq!(content.text_content(), "A & B <c>");
    }

    #[test]
    fn image_mockup_uses_thumbnail() {
        let content = RegionContent::Mockup(MockupView {
            kind: MockupType::Image,
            title: "LayerLens".into(),
            subtitle: "Design System".into(),
            image: Some("images/layerlens-thumbnail.svg".into()),
        });
        let html = content.to_html();
        assert!(html.contains(r#"src="images/layerlens-thumbnail.svg""#));
        assert!(html.contains("LayerLens - Thumbnail"));
    }

    #[test]
    fn not_found_view_links_home() {
        let content = RegionContent::NotFound(NotFoundView::default());
        assert!(content.to_html().contains(r#"href="index.html""#));
        assert!(content.text_content().starts_with("Sector Not Found"));
    }
}
