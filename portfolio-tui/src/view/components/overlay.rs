//! 页面切换遮罩
//!
//! 从左向右展开覆盖主内容区，宽度跟随 `PageTransitions::overlay_progress`。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use portfolio_core::services::OverlayPhase;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染遮罩
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let transitions = &app.session.transitions;
    let progress = transitions.overlay_progress(app.now);
    if progress <= 0.0 {
        return;
    }

    let width = (f32::from(area.width) * progress).round() as u16;
    if width == 0 {
        return;
    }
    let covered = Rect::new(area.x, area.y, width.min(area.width), area.height);

    let c = colors();
    frame.render_widget(Clear, covered);
    frame.render_widget(Block::default().style(Style::default().bg(c.overlay)), covered);

    if transitions.phase() == OverlayPhase::Covering && covered.height > 0 {
        let middle = Rect::new(covered.x, covered.y + covered.height / 2, covered.width, 1);
        let loading = Paragraph::new(t().transition.loading)
            .alignment(Alignment::Center)
            .style(Style::default().bg(c.overlay).fg(c.fg).add_modifier(Modifier::BOLD));
        frame.render_widget(loading, middle);
    }
}
