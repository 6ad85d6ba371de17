//! 侧边栏运行时状态

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::CancellableTimer;

/// 可见性阶段
///
/// `Showing` / `Hiding` 为过渡阶段，只能由动画计时器结束。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SidebarPhase {
    #[default]
    Hidden,
    Showing,
    Visible,
    Hiding,
}

/// 指针坐标（像素）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// 侧边栏状态，由组件独占
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    pub(crate) phase: SidebarPhase,
    pub(crate) hovered: bool,
    /// 待执行的隐藏（至多一个）
    pub(crate) hide_timer: CancellableTimer,
    /// 当前过渡动画的结束时刻
    pub(crate) animation_timer: CancellableTimer,
    pub(crate) last_pointer: Point,
    pub(crate) touch_origin: f64,
    pub(crate) touch_session: bool,
    /// 上一次被处理的指针采样时刻
    pub(crate) last_sample: Option<Duration>,
}

impl SidebarState {
    #[must_use]
    pub fn phase(&self) -> SidebarPhase {
        self.phase
    }

    /// 面板是否处于显示状态（`Visible` 或正在隐藏）
    #[must_use]
    pub fn visible(&self) -> bool {
        matches!(self.phase, SidebarPhase::Visible | SidebarPhase::Hiding)
    }

    /// 是否处于过渡动画中
    #[must_use]
    pub fn animating(&self) -> bool {
        matches!(self.phase, SidebarPhase::Showing | SidebarPhase::Hiding)
    }

    #[must_use]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn hide_pending(&self) -> bool {
        self.hide_timer.is_pending()
    }

    /// 生成状态快照
    #[must_use]
    pub fn snapshot(&self) -> SidebarSnapshot {
        SidebarSnapshot {
            phase: self.phase,
            visible: self.visible(),
            hovered: self.hovered,
            animating: self.animating(),
            hide_pending: self.hide_pending(),
            last_pointer: self.last_pointer,
            touch_origin: self.touch_origin,
            touch_session: self.touch_session,
        }
    }
}

/// 状态快照（随通知一起发出）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarSnapshot {
    pub phase: SidebarPhase,
    pub visible: bool,
    pub hovered: bool,
    pub animating: bool,
    pub hide_pending: bool,
    pub last_pointer: Point,
    pub touch_origin: f64,
    pub touch_session: bool,
}

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    #[serde(rename = "sidebarShown")]
    Shown,
    #[serde(rename = "sidebarHidden")]
    Hidden,
}

impl NotificationKind {
    /// 事件名
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shown => "sidebarShown",
            Self::Hidden => "sidebarHidden",
        }
    }
}

/// 对外通知
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarNotification {
    pub kind: NotificationKind,
    /// 面板元素 ID
    pub panel_id: String,
    pub state: SidebarSnapshot,
}
