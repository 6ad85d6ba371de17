//! 快捷键配置
//!
//! 定义快捷键映射。侧边栏自身的快捷键（Alt+s、Esc、Tab）由 core 判定，
//! 这里只负责把它们识别出来交过去。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Backspace);
    pub const HISTORY_BACK: KeyBinding = KeyBinding::alt(KeyCode::Left);

    // 列表 / 滚动
    pub const UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const UP_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const DOWN_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const FIRST: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const LAST: KeyBinding = KeyBinding::key(KeyCode::End);
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
}
