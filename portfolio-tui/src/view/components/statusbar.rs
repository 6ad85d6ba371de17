//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前状态生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().error)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let mut hints = Vec::new();

    if app.session.sidebar.is_visible() {
        hints.push((keys.arrows_vertical, texts.hints.select));
        hints.push((keys.tab, texts.hints.cycle_links));
        hints.push((keys.enter, texts.common.open));
        hints.push((keys.esc, texts.hints.close_sidebar));
    } else {
        match &app.session.page {
            Page::Home => {
                hints.push((keys.arrows_vertical, texts.hints.select));
                hints.push((keys.enter, texts.common.open));
            }
            Page::Sector(_) if app.session.is_not_found() => {
                hints.push((keys.enter, texts.common.back));
            }
            Page::Sector(_) => {
                hints.push((keys.arrows_vertical, texts.hints.scroll));
                hints.push((keys.esc, texts.common.back));
            }
        }
        if !app.session.sidebar.is_inert() {
            hints.push((keys.alt_s, texts.hints.toggle_sidebar));
        }
    }

    hints.push((keys.question, texts.hints.help));
    hints.push((keys.q, texts.common.quit));

    hints
}

#[cfg(test)]
mod tests {
    use portfolio_core::SectorCatalog;
    use ratatui::layout::Rect;

    use super::*;
    use crate::backend::AppConfig;

    #[test]
    fn home_hints_offer_the_sidebar_shortcut() {
        let app = App::new(
            AppConfig::default(),
            SectorCatalog::builtin(),
            Rect::new(0, 0, 100, 30),
        );
        let hints = get_hints(&app);
        assert!(hints.contains(&(t().hints.keys.alt_s, t().hints.toggle_sidebar)));
        assert_eq!(hints.last(), Some(&(t().hints.keys.q, t().common.quit)));
    }
}
