//! 近距离感应侧边栏
//!
//! 指针靠近视口左边缘时滑出的导航面板。组件不持有任何真实计时器：
//! 宿主把每个输入事件连同当前时刻 `now` 交给组件，并周期性调用
//! [`ProximitySidebar::tick`] 推进到期的计时器。
//!
//! ```text
//!            show()                 动画结束
//!   Hidden ─────────► Showing ──────────────► Visible
//!     ▲                                         │
//!     │ 动画结束                                │ hide()
//!     └────────────── Hiding ◄──────────────────┘
//! ```
//!
//! 过渡阶段中的 `show()` / `hide()` 请求一律忽略。

mod config;
mod focus;
mod input;
mod state;

use std::time::Duration;

pub use config::{
    HostCapabilities, SidebarConfig, SidebarOptions, GESTURE_THRESHOLD, PEEK_DELAY,
    RESIZE_DEBOUNCE,
};
pub use focus::FocusableSet;
pub use input::{Key, KeyInput, KeyOutcome, TouchPoint};
pub use state::{
    NotificationKind, Point, SidebarNotification, SidebarPhase, SidebarSnapshot, SidebarState,
};

use crate::traits::Document;
use crate::utils::CancellableTimer;

/// 面板显示时挂在根元素上的类名
pub const VISIBLE_CLASS: &str = "visible";

/// 组件使用的元素 ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarElements {
    /// 面板根元素（必需）
    pub panel: String,
    /// 左侧检测区，缺失时自动创建
    pub detection_zone: String,
    /// "peek" 按钮（可选）
    pub peek_button: String,
}

impl Default for SidebarElements {
    fn default() -> Self {
        Self {
            panel: "proximitySidebar".to_string(),
            detection_zone: "sidebarDetectionZone".to_string(),
            peek_button: "sidebarPeek".to_string(),
        }
    }
}

impl SidebarElements {
    /// 以给定面板 ID 派生其余元素 ID
    #[must_use]
    pub fn for_panel(panel: &str) -> Self {
        Self {
            panel: panel.to_string(),
            detection_zone: format!("{panel}DetectionZone"),
            peek_button: format!("{panel}Peek"),
        }
    }
}

/// 近距离感应侧边栏
///
/// 挂载失败（面板根元素不存在）时组件处于惰性状态，所有调用均为空操作。
#[derive(Debug, Default)]
pub struct ProximitySidebar {
    attached: Option<Attached>,
}

#[derive(Debug)]
struct Attached {
    elements: SidebarElements,
    config: SidebarConfig,
    capabilities: HostCapabilities,
    state: SidebarState,
    focusables: FocusableSet,
    peek_timer: CancellableTimer,
    resize_timer: CancellableTimer,
    /// 节流窗口内被丢弃的最后一个指针样本，窗口结束时补处理
    pending_sample: Option<Point>,
    sample_timer: CancellableTimer,
    notifications: Vec<SidebarNotification>,
}

/// 到期计时器种类；同一时刻到期时按声明顺序处理
#[derive(Debug, Clone, Copy)]
enum Due {
    Animation,
    Hide,
    Peek,
    Resize,
    Sample,
}

impl ProximitySidebar {
    /// 挂载到文档
    pub fn attach(
        doc: &mut dyn Document,
        elements: SidebarElements,
        options: &SidebarOptions,
        capabilities: HostCapabilities,
    ) -> Self {
        if !doc.has_element(&elements.panel) {
            log::error!("ProximitySidebar: Sidebar element '{}' not found", elements.panel);
            return Self::default();
        }

        let config = SidebarConfig::from_options(options);
        let focusables = FocusableSet::capture(doc, &elements.panel);

        if !doc.has_element(&elements.detection_zone) {
            doc.create_element(&elements.detection_zone);
        }

        let attached = Attached {
            elements,
            config,
            capabilities,
            state: SidebarState::default(),
            focusables,
            peek_timer: CancellableTimer::new(),
            resize_timer: CancellableTimer::new(),
            pending_sample: None,
            sample_timer: CancellableTimer::new(),
            notifications: Vec::new(),
        };

        attached.refresh_detection_zone(doc);
        doc.set_attribute(&attached.elements.panel, "aria-hidden", "true");
        attached.focusables.set_tabbable(doc, false);

        log::info!(
            "ProximitySidebar initialized ({} focusable elements, touch: {})",
            attached.focusables.ids().len(),
            attached.touch_enabled()
        );

        Self {
            attached: Some(attached),
        }
    }

    /// 是否处于惰性状态
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.attached.is_none()
    }

    #[must_use]
    pub fn phase(&self) -> Option<SidebarPhase> {
        self.attached.as_ref().map(|a| a.state.phase)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.attached.as_ref().is_some_and(|a| a.state.visible())
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<SidebarSnapshot> {
        self.attached.as_ref().map(|a| a.state.snapshot())
    }

    #[must_use]
    pub fn config(&self) -> Option<&SidebarConfig> {
        self.attached.as_ref().map(|a| &a.config)
    }

    #[must_use]
    pub fn elements(&self) -> Option<&SidebarElements> {
        self.attached.as_ref().map(|a| &a.elements)
    }

    #[must_use]
    pub fn focusables(&self) -> Option<&FocusableSet> {
        self.attached.as_ref().map(|a| &a.focusables)
    }

    /// 当前动画的进度（0.0 ~ 1.0），无动画时为 `None`
    #[must_use]
    pub fn animation_progress(&self, now: Duration) -> Option<f64> {
        let a = self.attached.as_ref()?;
        let remaining = a.state.animation_timer.remaining(now)?;
        let total = a.config.animation_duration.as_secs_f64();
        if total <= 0.0 {
            return Some(1.0);
        }
        Some((1.0 - remaining.as_secs_f64() / total).clamp(0.0, 1.0))
    }

    /// 最近的计时器到期时刻，供宿主决定下一次 tick
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        let a = self.attached.as_ref()?;
        [
            a.state.animation_timer.deadline(),
            a.state.hide_timer.deadline(),
            a.peek_timer.deadline(),
            a.resize_timer.deadline(),
            a.sample_timer.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// 取出并清空待发通知
    pub fn drain_notifications(&mut self) -> Vec<SidebarNotification> {
        self.attached
            .as_mut()
            .map(|a| std::mem::take(&mut a.notifications))
            .unwrap_or_default()
    }

    // ========== 输入 ==========

    pub fn pointer_move(&mut self, x: f64, y: f64, now: Duration, doc: &mut dyn Document) {
        if let Some(a) = self.attached.as_mut() {
            a.pointer_move(Point { x, y }, now, doc);
        }
    }

    /// 指针离开整个文档
    pub fn pointer_leave_document(&mut self, now: Duration) {
        if let Some(a) = self.attached.as_mut() {
            if a.state.visible() && !a.state.hovered {
                a.schedule_hide(now);
            }
        }
    }

    pub fn panel_enter(&mut self) {
        if let Some(a) = self.attached.as_mut() {
            a.state.hovered = true;
            a.state.hide_timer.cancel();
        }
    }

    pub fn panel_leave(&mut self, now: Duration) {
        if let Some(a) = self.attached.as_mut() {
            a.state.hovered = false;
            if a.state.visible() {
                a.schedule_hide(now);
            }
        }
    }

    /// 键盘事件；返回 `Handled` 时宿主应阻止默认行为
    pub fn key(&mut self, input: KeyInput, now: Duration, doc: &mut dyn Document) -> KeyOutcome {
        match self.attached.as_mut() {
            Some(a) if a.config.enable_keyboard => a.key(input, now, doc),
            _ => KeyOutcome::Ignored,
        }
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        if let Some(a) = self.attached.as_mut() {
            if let [touch] = touches {
                if a.touch_enabled() {
                    a.state.touch_origin = touch.x;
                    a.state.touch_session = true;
                }
            }
        }
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint], now: Duration, doc: &mut dyn Document) {
        if let Some(a) = self.attached.as_mut() {
            if let [touch] = touches {
                a.touch_move(*touch, now, doc);
            }
        }
    }

    pub fn touch_end(&mut self) {
        if let Some(a) = self.attached.as_mut() {
            a.state.touch_session = false;
        }
    }

    /// 视口尺寸变化（防抖后在 `tick` 中处理）
    pub fn resize(&mut self, now: Duration) {
        if let Some(a) = self.attached.as_mut() {
            a.resize_timer.schedule(now, RESIZE_DEBOUNCE);
        }
    }

    /// 页面可见性变化；隐藏时立即收起面板
    pub fn visibility_change(&mut self, hidden: bool, now: Duration, doc: &mut dyn Document) {
        if let Some(a) = self.attached.as_mut() {
            if hidden && a.state.visible() {
                a.hide(now, doc);
            }
        }
    }

    pub fn peek_click(&mut self, now: Duration, doc: &mut dyn Document) {
        self.toggle(now, doc);
    }

    pub fn peek_hover(&mut self, now: Duration) {
        if let Some(a) = self.attached.as_mut() {
            if !a.state.visible() {
                a.peek_timer.schedule(now, PEEK_DELAY);
            }
        }
    }

    pub fn toggle(&mut self, now: Duration, doc: &mut dyn Document) {
        if let Some(a) = self.attached.as_mut() {
            if a.state.visible() {
                a.hide(now, doc);
            } else {
                a.show(now, doc);
            }
        }
    }

    /// 请求显示；返回是否真正开始了显示动画
    pub fn show(&mut self, now: Duration, doc: &mut dyn Document) -> bool {
        self.attached.as_mut().is_some_and(|a| a.show(now, doc))
    }

    /// 请求隐藏；返回是否真正开始了隐藏动画
    pub fn hide(&mut self, now: Duration, doc: &mut dyn Document) -> bool {
        self.attached.as_mut().is_some_and(|a| a.hide(now, doc))
    }

    /// 推进到期的计时器
    ///
    /// 多个计时器在同一次 tick 内到期时，按到期时刻依次处理，
    /// 每个回调都以自身的到期时刻作为 "当前时间"。
    pub fn tick(&mut self, now: Duration, doc: &mut dyn Document) {
        if let Some(a) = self.attached.as_mut() {
            a.tick(now, doc);
        }
    }

    /// 重新合并选项并刷新检测区
    pub fn update_options(&mut self, options: &SidebarOptions, doc: &mut dyn Document) {
        if let Some(a) = self.attached.as_mut() {
            a.config.apply(options);
            a.refresh_detection_zone(doc);
            log::debug!("ProximitySidebar options updated: {:?}", a.config);
        }
    }

    /// 取消所有计时器并进入惰性状态
    pub fn destroy(&mut self) {
        if let Some(mut a) = self.attached.take() {
            a.state.hide_timer.cancel();
            a.state.animation_timer.cancel();
            a.peek_timer.cancel();
            a.resize_timer.cancel();
            a.sample_timer.cancel();
            a.pending_sample = None;
            log::info!("ProximitySidebar '{}' destroyed", a.elements.panel);
        }
    }
}

impl Attached {
    fn touch_enabled(&self) -> bool {
        self.config.enable_touch && self.capabilities.touch
    }

    fn refresh_detection_zone(&self, doc: &mut dyn Document) {
        doc.set_attribute(
            &self.elements.detection_zone,
            "style.width",
            &format!("{}px", self.config.detection_width),
        );
    }

    fn schedule_hide(&mut self, now: Duration) {
        self.state.hide_timer.schedule(now, self.config.hide_delay);
    }

    fn pointer_move(&mut self, point: Point, now: Duration, doc: &mut dyn Document) {
        if self.state.touch_session {
            return;
        }
        if let Some(last) = self.state.last_sample {
            if now.saturating_sub(last) < self.config.debounce_interval {
                self.pending_sample = Some(point);
                if !self.sample_timer.is_pending() {
                    self.sample_timer.schedule(last, self.config.debounce_interval);
                }
                return;
            }
        }
        self.process_sample(point, now, doc);
    }

    fn process_sample(&mut self, point: Point, now: Duration, doc: &mut dyn Document) {
        self.sample_timer.cancel();
        self.pending_sample = None;
        self.state.last_sample = Some(now);
        self.state.last_pointer = point;

        if point.x <= self.config.detection_width_px() {
            if !self.state.visible() {
                self.show(now, doc);
            }
        } else if self.state.visible() && !self.state.hovered && !self.state.hide_pending() {
            self.schedule_hide(now);
        }
    }

    fn key(&mut self, input: KeyInput, now: Duration, doc: &mut dyn Document) -> KeyOutcome {
        if input.is_toggle_shortcut() {
            if self.state.visible() {
                self.hide(now, doc);
            } else {
                self.show(now, doc);
            }
            return KeyOutcome::Handled;
        }

        match input.key {
            Key::Escape if self.state.visible() => {
                self.hide(now, doc);
                KeyOutcome::Handled
            }
            Key::Tab if self.state.visible() => {
                let target = self
                    .focusables
                    .wrap_target(doc.active_element(), input.shift)
                    .map(str::to_string);
                match target {
                    Some(id) => {
                        doc.focus(&id);
                        KeyOutcome::Handled
                    }
                    None => KeyOutcome::Ignored,
                }
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn touch_move(&mut self, touch: TouchPoint, now: Duration, doc: &mut dyn Document) {
        if !self.touch_enabled() || !self.state.touch_session {
            return;
        }
        let delta = touch.x - self.state.touch_origin;

        if self.state.touch_origin <= self.config.detection_width_px() && delta > GESTURE_THRESHOLD
        {
            self.show(now, doc);
        } else if self.state.visible() && delta < -GESTURE_THRESHOLD {
            self.hide(now, doc);
        }
    }

    fn show(&mut self, now: Duration, doc: &mut dyn Document) -> bool {
        if self.state.visible() || self.state.animating() {
            return false;
        }
        self.state.phase = SidebarPhase::Showing;
        self.state.hide_timer.cancel();
        self.peek_timer.cancel();

        doc.set_attribute(&self.elements.panel, "aria-hidden", "false");
        doc.set_class(&self.elements.panel, VISIBLE_CLASS, true);
        self.state
            .animation_timer
            .schedule(now, self.config.animation_duration);

        log::debug!("ProximitySidebar showing");
        true
    }

    fn hide(&mut self, now: Duration, doc: &mut dyn Document) -> bool {
        if !self.state.visible() || self.state.animating() {
            return false;
        }
        self.state.phase = SidebarPhase::Hiding;
        self.state.hide_timer.cancel();

        doc.set_attribute(&self.elements.panel, "aria-hidden", "true");
        doc.set_class(&self.elements.panel, VISIBLE_CLASS, false);
        self.state
            .animation_timer
            .schedule(now, self.config.animation_duration);

        log::debug!("ProximitySidebar hiding");
        true
    }

    fn tick(&mut self, now: Duration, doc: &mut dyn Document) {
        while let Some((at, due)) = self.next_due(now) {
            match due {
                Due::Animation => {
                    self.state.animation_timer.cancel();
                    self.complete_transition(doc);
                }
                Due::Hide => {
                    self.state.hide_timer.cancel();
                    self.hide(at, doc);
                }
                Due::Peek => {
                    self.peek_timer.cancel();
                    if !self.state.visible() {
                        self.show(at, doc);
                    }
                }
                Due::Resize => {
                    self.resize_timer.cancel();
                    self.refresh_detection_zone(doc);
                    if self.state.visible() {
                        self.hide(at, doc);
                    }
                }
                Due::Sample => {
                    self.sample_timer.cancel();
                    match self.pending_sample.take() {
                        Some(point) if !self.state.touch_session => {
                            self.process_sample(point, at, doc);
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn next_due(&self, now: Duration) -> Option<(Duration, Due)> {
        [
            (self.state.animation_timer.deadline(), Due::Animation),
            (self.state.hide_timer.deadline(), Due::Hide),
            (self.peek_timer.deadline(), Due::Peek),
            (self.resize_timer.deadline(), Due::Resize),
            (self.sample_timer.deadline(), Due::Sample),
        ]
        .into_iter()
        .filter_map(|(deadline, due)| deadline.filter(|d| *d <= now).map(|d| (d, due)))
        .min_by_key(|(deadline, _)| *deadline)
    }

    fn complete_transition(&mut self, doc: &mut dyn Document) {
        match self.state.phase {
            SidebarPhase::Showing => {
                self.state.phase = SidebarPhase::Visible;
                self.focusables.set_tabbable(doc, true);
                if doc.active_element().is_none() {
                    if let Some(first) = self.focusables.first() {
                        doc.focus(first);
                    }
                }
                self.notify(NotificationKind::Shown);
                log::debug!("ProximitySidebar visible");
            }
            SidebarPhase::Hiding => {
                self.state.phase = SidebarPhase::Hidden;
                self.focusables.set_tabbable(doc, false);
                self.state.hovered = false;
                self.notify(NotificationKind::Hidden);
                log::debug!("ProximitySidebar hidden");
            }
            SidebarPhase::Hidden | SidebarPhase::Visible => {}
        }
    }

    fn notify(&mut self, kind: NotificationKind) {
        self.notifications.push(SidebarNotification {
            kind,
            panel_id: self.elements.panel.clone(),
            state: self.state.snapshot(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ms, sidebar_document, SIDEBAR_LINKS};
    use crate::traits::InMemoryDocument;

    fn attach(doc: &mut InMemoryDocument) -> ProximitySidebar {
        ProximitySidebar::attach(
            doc,
            SidebarElements::default(),
            &SidebarOptions::default(),
            HostCapabilities { touch: true },
        )
    }

    fn visible_sidebar(doc: &mut InMemoryDocument) -> ProximitySidebar {
        let mut sidebar = attach(doc);
        sidebar.pointer_move(40.0, 100.0, ms(0), doc);
        sidebar.tick(ms(350), doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Visible));
        sidebar
    }

    #[test]
    fn missing_panel_makes_component_inert() {
        let mut doc = InMemoryDocument::new().with_element("other");
        let mut sidebar = attach(&mut doc);

        assert!(sidebar.is_inert());
        sidebar.pointer_move(10.0, 10.0, ms(0), &mut doc);
        sidebar.tick(ms(1000), &mut doc);
        assert!(!sidebar.show(ms(1000), &mut doc));
        assert_eq!(
            sidebar.key(KeyInput::plain(Key::Escape), ms(0), &mut doc),
            KeyOutcome::Ignored
        );
        assert!(sidebar.snapshot().is_none());
        assert!(sidebar.drain_notifications().is_empty());
    }

    #[test]
    fn attach_prepares_document() {
        let mut doc = sidebar_document();
        let sidebar = attach(&mut doc);
        let elements = SidebarElements::default();

        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));
        assert_eq!(doc.attribute(&elements.panel, "aria-hidden"), Some("true"));
        assert_eq!(
            doc.attribute(&elements.detection_zone, "style.width"),
            Some("60px")
        );
        for id in SIDEBAR_LINKS {
            assert_eq!(doc.attribute(id, "tabindex"), Some("-1"));
        }
    }

    #[test]
    fn pointer_in_detection_zone_shows_panel() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        sidebar.pointer_move(40.0, 100.0, ms(0), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Showing));
        assert!(doc.has_class("proximitySidebar", VISIBLE_CLASS));

        sidebar.tick(ms(349), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Showing));

        sidebar.tick(ms(350), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Visible));
        for id in SIDEBAR_LINKS {
            assert_eq!(doc.attribute(id, "tabindex"), Some("0"));
        }
        assert_eq!(doc.active_element(), Some(SIDEBAR_LINKS[0]));

        let notes = sidebar.drain_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Shown);
        assert_eq!(notes[0].panel_id, "proximitySidebar");
        assert!(notes[0].state.visible);
    }

    #[test]
    fn pointer_away_hides_after_delay() {
        let mut doc = sidebar_document();
        let mut sidebar = visible_sidebar(&mut doc);
        sidebar.drain_notifications();

        sidebar.pointer_move(500.0, 100.0, ms(400), &mut doc);
        assert!(sidebar.snapshot().unwrap().hide_pending);

        sidebar.tick(ms(599), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Visible));

        sidebar.tick(ms(600), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hiding));
        assert_eq!(doc.attribute("proximitySidebar", "aria-hidden"), Some("true"));

        sidebar.tick(ms(950), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));
        for id in SIDEBAR_LINKS {
            assert_eq!(doc.attribute(id, "tabindex"), Some("-1"));
        }
        let notes = sidebar.drain_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Hidden);
    }

    #[test]
    fn late_tick_processes_chained_timers() {
        let mut doc = sidebar_document();
        let mut sidebar = visible_sidebar(&mut doc);

        sidebar.pointer_move(500.0, 100.0, ms(400), &mut doc);
        sidebar.tick(ms(5000), &mut doc);

        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));
    }

    #[test]
    fn hovering_cancels_pending_hide() {
        let mut doc = sidebar_document();
        let mut sidebar = visible_sidebar(&mut doc);

        sidebar.pointer_move(500.0, 100.0, ms(400), &mut doc);
        sidebar.panel_enter();
        sidebar.tick(ms(2000), &mut doc);

        assert_eq!(sidebar.phase(), Some(SidebarPhase::Visible));
        assert!(!sidebar.snapshot().unwrap().hide_pending);
    }

    #[test]
    fn moves_beyond_zone_do_not_restart_pending_hide() {
        let mut doc = sidebar_document();
        let mut sidebar = visible_sidebar(&mut doc);

        sidebar.pointer_move(500.0, 100.0, ms(400), &mut doc);
        sidebar.pointer_move(520.0, 100.0, ms(500), &mut doc);
        sidebar.tick(ms(600), &mut doc);

        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hiding));
    }

    #[test]
    fn panel_leave_schedules_hide() {
        let mut doc = sidebar_document();
        let mut sidebar = visible_sidebar(&mut doc);

        sidebar.panel_enter();
        sidebar.panel_leave(ms(400));
        assert!(sidebar.snapshot().unwrap().hide_pending);
        sidebar.tick(ms(600), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hiding));
    }

    #[test]
    fn pointer_samples_are_throttled() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        sidebar.pointer_move(500.0, 100.0, ms(0), &mut doc);
        sidebar.pointer_move(10.0, 100.0, ms(10), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));

        sidebar.pointer_move(10.0, 100.0, ms(16), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Showing));
        assert_eq!(sidebar.next_deadline(), Some(ms(366)));
    }

    #[test]
    fn throttled_sample_is_processed_when_pointer_rests() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        sidebar.pointer_move(200.0, 100.0, ms(0), &mut doc);
        sidebar.pointer_move(40.0, 100.0, ms(8), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));
        assert_eq!(sidebar.next_deadline(), Some(ms(16)));

        sidebar.tick(ms(16), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Showing));
        assert_eq!(sidebar.snapshot().unwrap().last_pointer, Point { x: 40.0, y: 100.0 });

        sidebar.tick(ms(2000), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Visible));
    }

    #[test]
    fn only_latest_throttled_sample_is_kept() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        sidebar.pointer_move(200.0, 100.0, ms(0), &mut doc);
        sidebar.pointer_move(40.0, 100.0, ms(5), &mut doc);
        sidebar.pointer_move(300.0, 100.0, ms(10), &mut doc);
        sidebar.tick(ms(2000), &mut doc);

        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));
        assert_eq!(sidebar.next_deadline(), None);
    }

    #[test]
    fn show_is_noop_while_animating_or_visible() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        assert!(sidebar.show(ms(0), &mut doc));
        assert!(!sidebar.show(ms(100), &mut doc));
        assert!(!sidebar.hide(ms(100), &mut doc));

        // 动画结束时刻未被第二次请求推迟
        sidebar.tick(ms(350), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Visible));
        assert!(!sidebar.show(ms(400), &mut doc));
        assert_eq!(sidebar.next_deadline(), None);
    }

    #[test]
    fn escape_hides_visible_panel() {
        let mut doc = sidebar_document();
        let mut sidebar = visible_sidebar(&mut doc);

        let outcome = sidebar.key(KeyInput::plain(Key::Escape), ms(400), &mut doc);
        assert!(outcome.is_handled());
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hiding));
    }

    #[test]
    fn escape_is_ignored_when_hidden() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);
        let outcome = sidebar.key(KeyInput::plain(Key::Escape), ms(0), &mut doc);
        assert_eq!(outcome, KeyOutcome::Ignored);
    }

    #[test]
    fn alt_s_toggles() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);
        let alt_s = KeyInput::plain(Key::Char('s')).with_alt();

        assert!(sidebar.key(alt_s, ms(0), &mut doc).is_handled());
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Showing));
        sidebar.tick(ms(350), &mut doc);

        assert!(sidebar.key(alt_s, ms(400), &mut doc).is_handled());
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hiding));
    }

    #[test]
    fn keyboard_can_be_disabled() {
        let mut doc = sidebar_document();
        let mut sidebar = ProximitySidebar::attach(
            &mut doc,
            SidebarElements::default(),
            &SidebarOptions {
                enable_keyboard: Some(false),
                ..SidebarOptions::default()
            },
            HostCapabilities::default(),
        );
        let alt_s = KeyInput::plain(Key::Char('s')).with_alt();
        assert_eq!(sidebar.key(alt_s, ms(0), &mut doc), KeyOutcome::Ignored);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));
    }

    #[test]
    fn tab_wraps_inside_visible_panel() {
        let mut doc = sidebar_document();
        let mut sidebar = visible_sidebar(&mut doc);
        let last = SIDEBAR_LINKS[SIDEBAR_LINKS.len() - 1];

        doc.focus(last);
        let outcome = sidebar.key(KeyInput::plain(Key::Tab), ms(400), &mut doc);
        assert!(outcome.is_handled());
        assert_eq!(doc.active_element(), Some(SIDEBAR_LINKS[0]));

        let outcome = sidebar.key(KeyInput::plain(Key::Tab).with_shift(), ms(410), &mut doc);
        assert!(outcome.is_handled());
        assert_eq!(doc.active_element(), Some(last));

        doc.focus(SIDEBAR_LINKS[1]);
        let outcome = sidebar.key(KeyInput::plain(Key::Tab), ms(420), &mut doc);
        assert_eq!(outcome, KeyOutcome::Ignored);
    }

    #[test]
    fn tab_is_not_trapped_when_hidden() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);
        let outcome = sidebar.key(KeyInput::plain(Key::Tab), ms(0), &mut doc);
        assert_eq!(outcome, KeyOutcome::Ignored);
    }

    #[test]
    fn swipe_from_edge_shows_panel() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        sidebar.touch_start(&[TouchPoint::new(10.0, 200.0)]);
        sidebar.touch_move(&[TouchPoint::new(50.0, 200.0)], ms(10), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));

        sidebar.touch_move(&[TouchPoint::new(70.0, 200.0)], ms(20), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Showing));
    }

    #[test]
    fn swipe_left_hides_panel() {
        let mut doc = sidebar_document();
        let mut sidebar = visible_sidebar(&mut doc);

        sidebar.touch_start(&[TouchPoint::new(200.0, 200.0)]);
        sidebar.touch_move(&[TouchPoint::new(120.0, 200.0)], ms(400), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hiding));
    }

    #[test]
    fn multi_touch_is_ignored() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);
        let two = [TouchPoint::new(10.0, 0.0), TouchPoint::new(20.0, 0.0)];

        sidebar.touch_start(&two);
        assert!(!sidebar.snapshot().unwrap().touch_session);
        sidebar.touch_move(&[TouchPoint::new(100.0, 0.0)], ms(10), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));
    }

    #[test]
    fn touch_requires_host_capability() {
        let mut doc = sidebar_document();
        let mut sidebar = ProximitySidebar::attach(
            &mut doc,
            SidebarElements::default(),
            &SidebarOptions::default(),
            HostCapabilities { touch: false },
        );
        sidebar.touch_start(&[TouchPoint::new(10.0, 0.0)]);
        sidebar.touch_move(&[TouchPoint::new(100.0, 0.0)], ms(10), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));
    }

    #[test]
    fn pointer_moves_are_ignored_during_touch_session() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        sidebar.touch_start(&[TouchPoint::new(300.0, 0.0)]);
        sidebar.pointer_move(10.0, 0.0, ms(0), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));

        sidebar.touch_end();
        sidebar.pointer_move(10.0, 0.0, ms(20), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Showing));
    }

    #[test]
    fn hidden_page_hides_immediately() {
        let mut doc = sidebar_document();
        let mut sidebar = visible_sidebar(&mut doc);

        sidebar.visibility_change(true, ms(400), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hiding));
    }

    #[test]
    fn peek_hover_shows_after_delay() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        sidebar.peek_hover(ms(0));
        sidebar.tick(ms(299), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hidden));
        sidebar.tick(ms(300), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Showing));
    }

    #[test]
    fn peek_click_toggles() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        sidebar.peek_click(ms(0), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Showing));
        sidebar.tick(ms(350), &mut doc);
        sidebar.peek_click(ms(400), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hiding));
    }

    #[test]
    fn resize_is_debounced_and_hides() {
        let mut doc = sidebar_document();
        let mut sidebar = visible_sidebar(&mut doc);

        sidebar.resize(ms(400));
        sidebar.resize(ms(500));
        sidebar.tick(ms(700), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Visible));

        sidebar.tick(ms(750), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Hiding));
    }

    #[test]
    fn update_options_refreshes_detection_zone() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        sidebar.update_options(
            &SidebarOptions {
                detection_width: Some(120),
                ..SidebarOptions::default()
            },
            &mut doc,
        );
        assert_eq!(
            doc.attribute("sidebarDetectionZone", "style.width"),
            Some("120px")
        );

        sidebar.pointer_move(100.0, 0.0, ms(0), &mut doc);
        assert_eq!(sidebar.phase(), Some(SidebarPhase::Showing));
    }

    #[test]
    fn destroy_cancels_pending_work() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        sidebar.show(ms(0), &mut doc);
        sidebar.destroy();
        sidebar.tick(ms(1000), &mut doc);

        assert!(sidebar.is_inert());
        assert!(sidebar.drain_notifications().is_empty());
    }

    #[test]
    fn animation_progress_tracks_timer() {
        let mut doc = sidebar_document();
        let mut sidebar = attach(&mut doc);

        assert_eq!(sidebar.animation_progress(ms(0)), None);
        sidebar.show(ms(0), &mut doc);
        let halfway = sidebar.animation_progress(ms(175)).unwrap();
        assert!((halfway - 0.5).abs() < 1e-9);
    }
}
