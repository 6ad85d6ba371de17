//! "未找到" 页面视图

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use portfolio_core::types::{NotFoundView, RegionContent};
use portfolio_core::Document;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染 "未找到" 页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let view = match app.session.document.body() {
        Some(RegionContent::NotFound(view)) => view.clone(),
        _ => NotFoundView::default(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            view.heading,
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(view.message, Style::default().fg(c.muted))),
        Line::from(""),
        Line::from(Span::styled(format!("[ {} ]", view.back_label), Styles::selected())),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
