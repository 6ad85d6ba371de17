//! 主布局渲染
//!
//! 区域计算（`ScreenAreas`）同时供 View 层绘制与 Update 层做鼠标命中测试，
//! 两边使用同一份几何，保证 "看到的" 与 "点到的" 一致。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use portfolio_core::sidebar::SidebarPhase;
use portfolio_core::Document;

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 单元格宽度（像素），指针坐标换算用
pub const CELL_WIDTH_PX: f64 = 8.0;
/// 单元格高度（像素）
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// 侧边栏完全展开时的宽度（列）
pub const SIDEBAR_COLUMNS: u16 = 28;
/// 首页头部（欢迎语）高度
pub const HOME_HEADER_ROWS: u16 = 4;
/// 首页卡片高度
pub const CARD_ROWS: u16 = 4;
/// 侧边栏链接行距
pub const LINK_ROWS: u16 = 2;

/// 屏幕各区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// 标题栏
    pub title: Rect,
    /// 标题栏右侧的 peek 按钮
    pub peek: Rect,
    /// 主内容区（含边框）
    pub content: Rect,
    /// 状态栏
    pub status: Rect,
    /// 侧边栏完全展开时的区域（覆盖在主内容区左侧）
    pub panel: Rect,
}

impl ScreenAreas {
    pub fn compute(viewport: Rect) -> Self {
        // 三层布局：标题栏 + 主内容区 + 状态栏
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 标题栏
                Constraint::Min(1),    // 主内容区
                Constraint::Length(1), // 状态栏
            ])
            .split(viewport);

        let (title, content, status) = (rows[0], rows[1], rows[2]);

        let peek_width = peek_label().chars().count() as u16;
        let peek = Rect::new(
            title.x + title.width.saturating_sub(peek_width),
            title.y,
            peek_width.min(title.width),
            title.height,
        );

        let panel = Rect::new(
            content.x,
            content.y,
            SIDEBAR_COLUMNS.min(content.width),
            content.height,
        );

        Self {
            title,
            peek,
            content,
            status,
            panel,
        }
    }

    /// 主内容区边框内部
    pub fn content_inner(&self) -> Rect {
        shrink(self.content, 1)
    }

    /// 首页卡片区域（只返回完整可见的卡片）
    pub fn card_rects(&self, count: usize) -> Vec<Rect> {
        let inner = self.content_inner();
        let top = inner.y + HOME_HEADER_ROWS;
        let bottom = inner.y + inner.height;

        (0..count)
            .map(|i| top + i as u16 * CARD_ROWS)
            .take_while(|y| y + CARD_ROWS <= bottom)
            .map(|y| Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), CARD_ROWS))
            .collect()
    }

    /// 侧边栏链接区域（以完全展开的面板计算）
    pub fn link_rects(&self, count: usize) -> Vec<Rect> {
        let inner = shrink(self.panel, 1);
        let top = inner.y + 1;
        let bottom = inner.y + inner.height;

        (0..count)
            .map(|i| top + i as u16 * LINK_ROWS)
            .take_while(|y| *y < bottom)
            .map(|y| Rect::new(inner.x, y, inner.width, 1))
            .collect()
    }
}

/// 单元格 → 像素
pub fn cell_to_px(column: u16, row: u16) -> (f64, f64) {
    (f64::from(column) * CELL_WIDTH_PX, f64::from(row) * CELL_HEIGHT_PX)
}

/// 点是否落在区域内
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// 侧边栏展开比例（0.0 ~ 1.0），跟随滑入 / 滑出动画
pub fn sidebar_reveal(app: &App) -> f64 {
    let sidebar = &app.session.sidebar;
    let progress = sidebar.animation_progress(app.now).unwrap_or(1.0);
    match sidebar.phase() {
        Some(SidebarPhase::Showing) => progress,
        Some(SidebarPhase::Visible) => 1.0,
        Some(SidebarPhase::Hiding) => 1.0 - progress,
        Some(SidebarPhase::Hidden) | None => 0.0,
    }
}

/// peek 按钮文本
pub fn peek_label() -> String {
    format!(" ☰ {} ", t().common.menu)
}

fn shrink(area: Rect, margin: u16) -> Rect {
    Rect::new(
        area.x + margin,
        area.y + margin,
        area.width.saturating_sub(margin * 2),
        area.height.saturating_sub(margin * 2),
    )
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let areas = ScreenAreas::compute(frame.area());

    // 渲染标题栏
    render_title_bar(app, frame, &areas);

    // 渲染页面内容
    render_page_content(app, frame, areas.content);

    // 渲染状态栏
    components::statusbar::render(app, frame, areas.status);

    // 侧边栏与遮罩覆盖在页面之上
    components::sidebar::render(app, frame, &areas);
    components::overlay::render(app, frame, areas.content);

    // 帮助（最上层）
    if app.show_help {
        components::help::render(frame);
    }
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, areas: &ScreenAreas) {
    let c = colors();
    let title = Paragraph::new(format!(" {}", app.session.document.title()))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, areas.title);

    let peek_style = if app.pointer.over_peek {
        Style::default()
            .bg(c.accent)
            .fg(c.bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(c.highlight).fg(c.selected_fg)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(peek_label(), peek_style))),
        areas.peek,
    );
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let page_title = match &app.session.page {
        Page::Home => texts.home.title,
        Page::Sector(_) if app.session.is_not_found() => texts.common.back,
        Page::Sector(_) => texts.sector.overview,
    };

    let block = Block::default()
        .title(format!(" {} ", page_title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.session.page {
        Page::Home => pages::home::render(app, frame, inner_area),
        Page::Sector(_) if app.session.is_not_found() => {
            pages::not_found::render(app, frame, inner_area)
        }
        Page::Sector(_) => pages::sector::render(app, frame, inner_area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_stack_vertically() {
        let areas = ScreenAreas::compute(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.title, Rect::new(0, 0, 100, 1));
        assert_eq!(areas.status, Rect::new(0, 29, 100, 1));
        assert_eq!(areas.content.height, 28);
        assert_eq!(areas.panel.width, SIDEBAR_COLUMNS);
        assert_eq!(areas.peek.x + areas.peek.width, 100);
    }

    #[test]
    fn cards_stop_at_the_bottom_edge() {
        let areas = ScreenAreas::compute(Rect::new(0, 0, 80, 20));
        // 内容区内部 16 行：头部 4 行，剩余 12 行放 3 张卡片
        let cards = areas.card_rects(10);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].y, 2 + HOME_HEADER_ROWS);
    }

    #[test]
    fn hit_testing_uses_half_open_rects() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(contains(area, 2, 3));
        assert!(contains(area, 5, 4));
        assert!(!contains(area, 6, 4));
        assert!(!contains(area, 5, 5));
    }
}
