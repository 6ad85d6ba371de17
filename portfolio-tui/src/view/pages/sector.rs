//! 作品详情页视图
//!
//! 只读取渲染器写入文档的各区域，不直接访问目录。
//! 缺失或为空的区域整段省略。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use portfolio_core::services::regions;
use portfolio_core::types::{MockupType, RegionContent};
use portfolio_core::{Document, InMemoryDocument};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染详情页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lines = content_lines(&app.session.document);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// 内容总行数（不计换行），用于限制滚动范围
pub fn line_count(doc: &InMemoryDocument) -> usize {
    content_lines(doc).len()
}

/// 文档 → 文本行
pub fn content_lines(doc: &InMemoryDocument) -> Vec<Line<'static>> {
    let texts = t();
    let c = colors();
    let mut lines = Vec::new();

    // 样机
    if let Some(RegionContent::Mockup(mockup)) = doc.content(regions::SECTOR_MOCKUP) {
        let frame_label = match mockup.kind {
            MockupType::Browser => "◐ ◐ ◐  browser",
            MockupType::App => "▣ app",
            MockupType::Mobile => "▯ mobile",
            MockupType::Image => "▨ image",
            MockupType::Custom => "◇",
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", texts.sector.mockup), Style::default().fg(c.muted)),
            Span::styled(frame_label.to_string(), Style::default().fg(c.accent)),
        ]));
        if let Some(image) = &mockup.image {
            lines.push(Line::styled(format!("  {image}"), Style::default().fg(c.muted)));
        }
        lines.push(Line::from(""));
    }

    // 类别 · 年份 · 状态
    let meta: Vec<String> = [
        regions::SECTOR_CATEGORY,
        regions::SECTOR_YEAR,
        regions::SECTOR_STATUS,
    ]
    .iter()
    .filter_map(|id| text(doc, id))
    .collect();
    if !meta.is_empty() {
        lines.push(Line::styled(meta.join(" · "), Style::default().fg(c.muted)));
    }

    if let Some(title) = text(doc, regions::SECTOR_TITLE) {
        lines.push(Line::styled(
            title,
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(subtitle) = text(doc, regions::SECTOR_SUBTITLE) {
        lines.push(Line::styled(subtitle, Style::default().fg(c.accent)));
    }
    if let Some(description) = text(doc, regions::SECTOR_DESCRIPTION) {
        lines.push(Line::from(""));
        lines.push(Line::from(description));
    }
    if let Some(line) = badges(doc, regions::SECTOR_TAGS) {
        lines.push(Line::from(""));
        lines.push(line);
    }

    // 项目信息
    let facts = [
        (texts.sector.duration, regions::PROJECT_DURATION),
        (texts.sector.team, regions::PROJECT_TEAM),
    ];
    let mut facts_started = false;
    for (label, id) in facts {
        if let Some(value) = text(doc, id) {
            if !facts_started {
                lines.push(Line::from(""));
                facts_started = true;
            }
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(c.muted)),
                Span::raw(value),
            ]));
        }
    }

    if let Some(line) = badges(doc, regions::PROJECT_TECHNOLOGIES) {
        section(&mut lines, texts.sector.technologies);
        lines.push(line);
    }

    match doc.content(regions::PROJECT_LINKS) {
        Some(RegionContent::Links(links)) if !links.is_empty() => {
            section(&mut lines, texts.sector.links);
            for link in links {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {} ", link.label), Style::default().fg(c.accent)),
                    Span::styled(link.href.clone(), Style::default().fg(c.muted)),
                ]));
            }
        }
        Some(RegionContent::Note(note)) => {
            section(&mut lines, texts.sector.links);
            lines.push(Line::styled(format!("  {note}"), Style::default().fg(c.muted)));
        }
        _ => {}
    }

    for (label, id) in [
        (texts.sector.challenges, regions::PROJECT_CHALLENGES),
        (texts.sector.solutions, regions::PROJECT_SOLUTIONS),
        (texts.sector.results, regions::PROJECT_RESULTS),
    ] {
        if let Some(RegionContent::List(items)) = doc.content(id) {
            if items.is_empty() {
                continue;
            }
            section(&mut lines, label);
            lines.extend(items.iter().map(|item| Line::from(format!("  • {item}"))));
        }
    }

    if let Some(RegionContent::Gallery(images)) = doc.content(regions::PROJECT_GALLERY) {
        if !images.is_empty() {
            section(&mut lines, texts.sector.gallery);
            lines.extend(images.iter().map(|image| {
                Line::from(vec![
                    Span::styled(format!("  ▨ {}", image.src), Style::default().fg(c.fg)),
                    Span::styled(format!("  {}", image.alt), Style::default().fg(c.muted)),
                ])
            }));
        }
    }

    lines
}

fn section(lines: &mut Vec<Line<'static>>, label: &str) {
    let c = colors();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        label.to_string(),
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ));
}

/// 非空文本区域
fn text(doc: &InMemoryDocument, id: &str) -> Option<String> {
    doc.text_content(id).filter(|value| !value.trim().is_empty())
}

/// 徽章区域 → 一行
fn badges(doc: &InMemoryDocument, id: &str) -> Option<Line<'static>> {
    let Some(RegionContent::Badges { items, .. }) = doc.content(id) else {
        return None;
    };
    if items.is_empty() {
        return None;
    }
    let c = colors();
    let mut spans = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{item}]"),
            Style::default().fg(c.tag),
        ));
    }
    Some(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use portfolio_core::{SectorCatalog, SectorPage};

    use super::*;

    fn rendered(id: &str) -> InMemoryDocument {
        let renderer = SectorPage::new(Arc::new(SectorCatalog::builtin()));
        let mut doc = InMemoryDocument::new()
            .with_elements(regions::ALL)
            .with_meta_description("");
        renderer.init(id, &mut doc);
        doc
    }

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn rendered_regions_become_lines() {
        let doc = rendered("layerlens");
        let lines = plain(&content_lines(&doc));

        assert!(lines.iter().any(|line| line == "LayerLens"));
        assert!(lines.iter().any(|line| line.starts_with("  • ")));
        assert_eq!(line_count(&doc), lines.len());
    }

    #[test]
    fn empty_document_has_no_lines() {
        let doc = InMemoryDocument::new().with_elements(regions::ALL);
        assert!(content_lines(&doc).is_empty());
    }
}
