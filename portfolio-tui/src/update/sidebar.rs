//! 侧边栏更新逻辑

use portfolio_core::sidebar::Key;
use portfolio_core::Document;

use crate::message::SidebarMessage;
use crate::model::App;

/// 处理侧边栏消息
pub fn update(app: &mut App, msg: SidebarMessage) {
    let now = app.now;

    match msg {
        SidebarMessage::Key(input) => {
            let session = &mut app.session;
            let outcome = session.sidebar.key(input, now, &mut session.document);
            if outcome.is_handled() {
                return;
            }

            // 侧边栏未处理：执行默认行为
            match input.key {
                Key::Escape => super::go_back(app),
                Key::Tab if app.session.sidebar.is_visible() => move_focus(app, !input.shift),
                _ => {}
            }
        }

        SidebarMessage::FocusNext => move_focus(app, true),
        SidebarMessage::FocusPrevious => move_focus(app, false),

        SidebarMessage::Activate => {
            let session = &app.session;
            let href = session
                .document
                .active_element()
                .filter(|id| session.sidebar.focusables().is_some_and(|set| set.contains(id)))
                .and_then(|id| session.href(id))
                .map(str::to_string);

            if let Some(href) = href {
                super::open_link(app, &href);
            }
        }
    }
}

/// 在侧边栏链接间移动焦点，两端回绕
///
/// 焦点不在链接上时，向前移到第一条，向后移到最后一条。
fn move_focus(app: &mut App, forward: bool) {
    let session = &mut app.session;
    let Some(ids) = session.sidebar.focusables().map(|set| set.ids().to_vec()) else {
        return;
    };
    if ids.is_empty() {
        return;
    }

    let len = ids.len();
    let current = session
        .document
        .active_element()
        .and_then(|active| ids.iter().position(|id| id == active));

    let target = match (current, forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    session.document.focus(&ids[target]);
}
