//! 宿主输入事件

use serde::{Deserialize, Serialize};

/// 按键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Escape,
    Tab,
    Other,
}

/// 键盘事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    pub key: Key,
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
}

impl KeyInput {
    /// 无修饰键
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            alt: false,
            shift: false,
            ctrl: false,
        }
    }

    #[must_use]
    pub const fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    #[must_use]
    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Alt+S（大小写均可）
    #[must_use]
    pub fn is_toggle_shortcut(&self) -> bool {
        self.alt && !self.ctrl && matches!(self.key, Key::Char('s' | 'S'))
    }
}

/// 键盘事件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// 已处理，宿主应阻止默认行为
    Handled,
    /// 未处理
    Ignored,
}

impl KeyOutcome {
    #[must_use]
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// 触摸点（像素）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_shortcut_accepts_both_cases() {
        assert!(KeyInput::plain(Key::Char('s')).with_alt().is_toggle_shortcut());
        assert!(KeyInput::plain(Key::Char('S')).with_alt().is_toggle_shortcut());
        assert!(!KeyInput::plain(Key::Char('s')).is_toggle_shortcut());
        assert!(!KeyInput::plain(Key::Char('d')).with_alt().is_toggle_shortcut());
    }
}
