//! 侧边栏组件
//!
//! 面板覆盖在主内容区左侧。滑入 / 滑出时按展开比例裁掉左侧的列，
//! 链接文字随面板一起移动。

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use portfolio_core::Document;

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::{sidebar_reveal, ScreenAreas};
use crate::view::theme::{colors, Styles};

/// 渲染侧边栏
pub fn render(app: &App, frame: &mut Frame, areas: &ScreenAreas) {
    let reveal = sidebar_reveal(app);
    let panel = areas.panel;
    let visible_width = (f64::from(panel.width) * reveal).round() as u16;
    if visible_width == 0 {
        return;
    }

    // 未露出的列数
    let hidden = panel.width - visible_width.min(panel.width);
    let area = Rect::new(panel.x, panel.y, visible_width.min(panel.width), panel.height);

    let c = colors();
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.panel_bg));
    frame.render_widget(block, area);

    // 标题
    let title_row = Rect::new(area.x, area.y, area.width.saturating_sub(1), 1);
    let title = clip_left(&format!(" {}", t().sidebar.title), hidden);
    frame.render_widget(
        Paragraph::new(Span::styled(title, Styles::title().bg(c.panel_bg))),
        title_row,
    );

    let active = app.session.document.active_element();
    let links = app.session.sidebar_links();
    let rects = areas.link_rects(links.len());

    for (link, rect) in links.iter().zip(rects) {
        let focused = active == Some(link.id.as_str());
        let style = if focused {
            Styles::selected()
        } else {
            Style::default().fg(c.fg).bg(c.panel_bg)
        };
        let marker = if focused { "▶ " } else { "  " };
        let text = clip_left(&format!("{marker}{}", link.label), hidden);

        // 面板右边框占一列
        let width = rect.width.min(area.width.saturating_sub(1));
        if width == 0 {
            continue;
        }
        let row = Rect::new(area.x, rect.y, width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, style))),
            row,
        );
    }
}

/// 按显示宽度裁掉左侧 `columns` 列
fn clip_left(text: &str, columns: u16) -> String {
    let mut skipped = 0usize;
    let columns = usize::from(columns);
    text.chars()
        .skip_while(|ch| {
            if skipped >= columns {
                return false;
            }
            skipped += ch.width().unwrap_or(0);
            true
        })
        .collect()
}
