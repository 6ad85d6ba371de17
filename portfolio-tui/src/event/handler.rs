//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use portfolio_core::sidebar::{Key, KeyInput};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, HomeMessage, PointerMessage, SidebarMessage};
use crate::model::{App, Page};




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event),
        Event::Resize(width, height) => AppMessage::Resized { width, height },
        Event::FocusLost => AppMessage::FocusChanged(false),
        Event::FocusGained => AppMessage::FocusChanged(true),
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助打开时只接受关闭帮助
    if app.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => AppMessage::ToggleHelp,
            KeyCode::Char('q') => AppMessage::Quit,
            _ => AppMessage::Noop,
        };
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 部分终端对 '?' 附带 SHIFT
    if DefaultKeymap::HELP.matches(&key) || key.code == KeyCode::Char('?') {
        return AppMessage::ToggleHelp;
    }

    if DefaultKeymap::HISTORY_BACK.matches(&key) {
        return AppMessage::HistoryBack;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Alt+s、Esc、Tab 先交给侧边栏
    if let Some(input) = sidebar_key_input(&key) {
        return AppMessage::Sidebar(SidebarMessage::Key(input));
    }

    // 侧边栏显示时，方向键与 Enter 作用于侧边栏链接
    if app.session.sidebar.is_visible() {
        return handle_sidebar_keys(key);
    }

    match &app.session.page {
        Page::Home => handle_home_keys(key),
        Page::Sector(_) if app.session.is_not_found() => {
            // "未找到" 页面只有一个返回链接
            if DefaultKeymap::CONFIRM.matches(&key) {
                AppMessage::GoBack
            } else {
                AppMessage::Noop
            }
        }
        Page::Sector(_) => handle_content_keys(key),
    }
}

/// crossterm 按键 → 侧边栏按键
///
/// 只转换侧边栏关心的按键，其余返回 `None`。
fn sidebar_key_input(key: &KeyEvent) -> Option<KeyInput> {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let (code, shift) = match key.code {
        KeyCode::Char(c) if alt => (Key::Char(c), shift),
        KeyCode::Esc => (Key::Escape, shift),
        KeyCode::Tab => (Key::Tab, shift),
        // Shift+Tab 在多数终端上报告为 BackTab
        KeyCode::BackTab => (Key::Tab, true),
        _ => return None,
    };

    Some(KeyInput {
        key: code,
        alt,
        shift,
        ctrl,
    })
}

/// 侧边栏显示时的按键
fn handle_sidebar_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::UP.matches(&key) || DefaultKeymap::UP_VIM.matches(&key) {
        AppMessage::Sidebar(SidebarMessage::FocusPrevious)
    } else if DefaultKeymap::DOWN.matches(&key) || DefaultKeymap::DOWN_VIM.matches(&key) {
        AppMessage::Sidebar(SidebarMessage::FocusNext)
    } else if DefaultKeymap::CONFIRM.matches(&key) {
        AppMessage::Sidebar(SidebarMessage::Activate)
    } else {
        AppMessage::Noop
    }
}

/// 首页卡片列表的按键
fn handle_home_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::UP.matches(&key) || DefaultKeymap::UP_VIM.matches(&key) {
        AppMessage::Home(HomeMessage::SelectPrevious)
    } else if DefaultKeymap::DOWN.matches(&key) || DefaultKeymap::DOWN_VIM.matches(&key) {
        AppMessage::Home(HomeMessage::SelectNext)
    } else if DefaultKeymap::FIRST.matches(&key) {
        AppMessage::Home(HomeMessage::SelectFirst)
    } else if DefaultKeymap::LAST.matches(&key) {
        AppMessage::Home(HomeMessage::SelectLast)
    } else if DefaultKeymap::CONFIRM.matches(&key) {
        AppMessage::Home(HomeMessage::Open)
    } else {
        AppMessage::Noop
    }
}

/// 详情页的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::Home => AppMessage::Content(ContentMessage::ScrollTop),
        KeyCode::End => AppMessage::Content(ContentMessage::ScrollBottom),
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent) -> AppMessage {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            AppMessage::Pointer(PointerMessage::Moved { column, row })
        }
        MouseEventKind::Down(MouseButton::Left) => {
            AppMessage::Pointer(PointerMessage::Clicked { column, row })
        }
        MouseEventKind::ScrollUp => AppMessage::Content(ContentMessage::ScrollUp),
        MouseEventKind::ScrollDown => AppMessage::Content(ContentMessage::ScrollDown),
        _ => AppMessage::Noop,
    }
}
