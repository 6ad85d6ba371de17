//! 首页视图
//!
//! 欢迎语 + 作品卡片列表。卡片位置来自 `ScreenAreas::card_rects`，
//! 与鼠标点击的命中测试共用。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::{ScreenAreas, HOME_HEADER_ROWS};
use crate::view::theme::{colors, Styles};

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    // 欢迎信息
    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.welcome),
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", texts.home.subtitle),
            Style::default().fg(c.muted),
        )),
    ];
    let header = Rect::new(area.x, area.y, area.width, HOME_HEADER_ROWS.min(area.height));
    frame.render_widget(Paragraph::new(welcome), header);

    let ids = app.session.card_sector_ids();
    if ids.is_empty() {
        let empty = Paragraph::new(Line::styled(
            format!("  {}", texts.home.empty),
            Style::default().fg(c.muted),
        ));
        let below = Rect::new(
            area.x,
            header.y + header.height,
            area.width,
            area.height.saturating_sub(header.height),
        );
        frame.render_widget(empty, below);
        return;
    }

    let rects = ScreenAreas::compute(frame.area()).card_rects(ids.len());
    for (i, (id, rect)) in ids.iter().zip(rects).enumerate() {
        let Some(summary) = app.catalog().homepage_data(id) else {
            continue;
        };
        let selected = i == app.home.selected;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if selected { c.border_focused } else { c.border }));

        let title_style = if selected {
            Styles::selected()
        } else {
            Styles::title()
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", summary.title), title_style),
                Span::styled(format!("  {}", summary.category), Style::default().fg(c.muted)),
            ]),
            Line::from(vec![
                Span::styled(format!(" {}", summary.subtitle), Style::default().fg(c.fg)),
                Span::styled(
                    format!("  {}", summary.tags.join(" · ")),
                    Style::default().fg(c.tag),
                ),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
