//! 鼠标更新逻辑
//!
//! 单元格坐标在这里换算成像素交给侧边栏，
//! 同时根据布局把移动翻译成面板与 peek 按钮的进入 / 离开。

use portfolio_core::sidebar::SidebarPhase;
use portfolio_core::Document;

use crate::message::PointerMessage;
use crate::model::{App, Page};
use crate::view::layout::{cell_to_px, contains, ScreenAreas};

/// 处理鼠标消息
pub fn update(app: &mut App, msg: PointerMessage) {
    match msg {
        PointerMessage::Moved { column, row } => moved(app, column, row),
        PointerMessage::Clicked { column, row } => clicked(app, column, row),
    }
}

/// 面板当前是否在屏幕上
fn panel_on_screen(app: &App) -> bool {
    app.session
        .sidebar
        .phase()
        .is_some_and(|phase| phase != SidebarPhase::Hidden)
}

fn moved(app: &mut App, column: u16, row: u16) {
    let now = app.now;
    let areas = ScreenAreas::compute(app.viewport);

    let (x, y) = cell_to_px(column, row);
    let session = &mut app.session;
    session.sidebar.pointer_move(x, y, now, &mut session.document);

    // 面板可能刚刚滑出到指针下方，移动之后再判断进入 / 离开
    let over_panel = panel_on_screen(app) && contains(areas.panel, column, row);
    if over_panel != app.pointer.over_panel {
        if over_panel {
            app.session.sidebar.panel_enter();
        } else {
            app.session.sidebar.panel_leave(now);
        }
        app.pointer.over_panel = over_panel;
    }

    let over_peek = contains(areas.peek, column, row);
    if over_peek && !app.pointer.over_peek {
        app.session.sidebar.peek_hover(now);
    }
    app.pointer.over_peek = over_peek;
}

fn clicked(app: &mut App, column: u16, row: u16) {
    let now = app.now;
    let areas = ScreenAreas::compute(app.viewport);

    if contains(areas.peek, column, row) {
        let session = &mut app.session;
        session.sidebar.peek_click(now, &mut session.document);
        return;
    }

    if panel_on_screen(app) && contains(areas.panel, column, row) {
        let links = app.session.sidebar_links();
        let hit = areas
            .link_rects(links.len())
            .into_iter()
            .zip(links)
            .find(|(rect, _)| contains(*rect, column, row));

        if let Some((_, link)) = hit {
            app.session.document.focus(&link.id);
            super::open_link(app, &link.href);
        }
        return;
    }

    if app.session.page == Page::Home {
        let count = app.session.card_sector_ids().len();
        let hit = areas
            .card_rects(count)
            .into_iter()
            .position(|rect| contains(rect, column, row));

        if let Some(index) = hit {
            app.home.select(index, count);
            super::home::open_selected(app);
        }
    }
}
