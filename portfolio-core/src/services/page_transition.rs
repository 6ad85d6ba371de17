//! 页面切换服务
//!
//! 点击导航时先展开全屏遮罩，等待展开动画结束后执行整页跳转。
//! 同一时间只允许一个切换；跳转失败时收起遮罩并清除进行中标记，允许重试。

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::traits::{Document, Navigator};
use crate::utils::CancellableTimer;

/// 遮罩元素 ID
pub const OVERLAY_ID: &str = "pageTransitionOverlay";

fn default_duration() -> Duration {
    Duration::from_millis(400)
}

fn default_home_url() -> String {
    "index.html".to_string()
}

/// 页面切换配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionConfig {
    /// 遮罩展开/收起时长
    #[serde(default = "default_duration", with = "crate::utils::millis")]
    pub duration: Duration,
    /// 返回时的首页地址
    #[serde(default = "default_home_url")]
    pub home_url: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            home_url: default_home_url(),
        }
    }
}

/// 遮罩阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayPhase {
    #[default]
    Hidden,
    /// 正在展开
    Revealing,
    /// 已完全覆盖，正在跳转
    Covering,
    /// 正在收起
    Retracting,
}

impl OverlayPhase {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Revealing => "revealing",
            Self::Covering => "covering",
            Self::Retracting => "retracting",
        }
    }
}

/// 链接解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Sector(String),
    Home,
}

/// 解析导航链接
///
/// 同时接受两种写法：页内锚点 `#layerlens` 与文档地址 `layerlens.html` / `./layerlens.html`。
/// 首页地址（`index.html`、`./`、`/`）解析为 `Home`。
pub fn parse_link(href: &str) -> CoreResult<LinkTarget> {
    let href = href.trim();

    if let Some(anchor) = href.strip_prefix('#') {
        return if is_sector_id(anchor) {
            Ok(LinkTarget::Sector(anchor.to_string()))
        } else {
            Err(CoreError::InvalidLink(href.to_string()))
        };
    }

    let path = href.strip_prefix("./").unwrap_or(href);
    if matches!(href, "/" | "./") || path == "index.html" {
        return Ok(LinkTarget::Home);
    }

    match path.strip_suffix(".html") {
        Some(id) if is_sector_id(id) => Ok(LinkTarget::Sector(id.to_string())),
        _ => Err(CoreError::InvalidLink(href.to_string())),
    }
}

fn is_sector_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// `tick` 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    /// 已跳转到该地址
    Navigated(String),
    /// 跳转失败，遮罩已开始收起
    Failed(CoreError),
}

/// 页面切换控制器
#[derive(Debug)]
pub struct PageTransitions {
    config: TransitionConfig,
    in_flight: bool,
    phase: OverlayPhase,
    destination: Option<String>,
    reveal_timer: CancellableTimer,
    retract_timer: CancellableTimer,
}

impl PageTransitions {
    /// 挂载到文档：缺少遮罩元素时创建
    pub fn attach(doc: &mut dyn Document, config: TransitionConfig) -> Self {
        if !doc.has_element(OVERLAY_ID) {
            doc.create_element(OVERLAY_ID);
        }
        let transitions = Self {
            config,
            in_flight: false,
            phase: OverlayPhase::Hidden,
            destination: None,
            reveal_timer: CancellableTimer::new(),
            retract_timer: CancellableTimer::new(),
        };
        transitions.sync_overlay(doc);
        log::info!("Page transitions initialized");
        transitions
    }

    #[must_use]
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// 是否有切换正在进行
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// 正在前往的地址
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// 遮罩覆盖比例（0.0 完全隐藏，1.0 完全覆盖），供宿主绘制动画
    #[must_use]
    pub fn overlay_progress(&self, now: Duration) -> f32 {
        let total = self.config.duration.as_secs_f32();
        let elapsed_fraction = |timer: &CancellableTimer| match timer.remaining(now) {
            Some(left) if total > 0.0 => 1.0 - (left.as_secs_f32() / total).clamp(0.0, 1.0),
            _ => 1.0,
        };

        match self.phase {
            OverlayPhase::Hidden => 0.0,
            OverlayPhase::Covering => 1.0,
            OverlayPhase::Revealing => elapsed_fraction(&self.reveal_timer),
            OverlayPhase::Retracting => 1.0 - elapsed_fraction(&self.retract_timer),
        }
    }

    /// 前往作品详情页（`<id>.html`）
    ///
    /// 已有切换进行中时忽略，返回 `false`。
    pub fn navigate_to_sector(
        &mut self,
        sector_id: &str,
        now: Duration,
        doc: &mut dyn Document,
    ) -> bool {
        self.begin(format!("{sector_id}.html"), now, doc)
    }

    /// 返回首页
    pub fn navigate_back(&mut self, now: Duration, doc: &mut dyn Document) -> bool {
        let home = self.config.home_url.clone();
        self.begin(home, now, doc)
    }

    /// 处理链接点击
    pub fn handle_link(
        &mut self,
        href: &str,
        now: Duration,
        doc: &mut dyn Document,
    ) -> CoreResult<bool> {
        match parse_link(href) {
            Ok(LinkTarget::Sector(id)) => Ok(self.navigate_to_sector(&id, now, doc)),
            Ok(LinkTarget::Home) => Ok(self.navigate_back(now, doc)),
            Err(e) => {
                log::warn!("Ignoring link: {e}");
                Err(e)
            }
        }
    }

    /// 推进计时器
    pub fn tick(
        &mut self,
        now: Duration,
        doc: &mut dyn Document,
        nav: &mut dyn Navigator,
    ) -> TickOutcome {
        if self.retract_timer.fire(now) {
            self.phase = OverlayPhase::Hidden;
            self.sync_overlay(doc);
        }

        if !self.reveal_timer.fire(now) {
            return TickOutcome::Idle;
        }

        self.phase = OverlayPhase::Covering;
        self.sync_overlay(doc);

        let Some(url) = self.destination.clone() else {
            return TickOutcome::Idle;
        };

        match nav.navigate(&url) {
            Ok(()) => {
                log::info!("Navigated to {url}");
                TickOutcome::Navigated(url)
            }
            Err(e) => {
                log::error!("Navigation error: {e}");
                self.hide_overlay(now, doc);
                self.in_flight = false;
                self.destination = None;
                TickOutcome::Failed(e)
            }
        }
    }

    /// 浏览器前进/后退
    ///
    /// 带状态时只记录；无状态时重新加载当前页面。
    pub fn handle_pop_state(&self, state: Option<&serde_json::Value>, nav: &mut dyn Navigator) {
        match state {
            Some(state) => log::debug!("Popstate with state: {state}"),
            None => nav.reload(),
        }
    }

    fn begin(&mut self, url: String, now: Duration, doc: &mut dyn Document) -> bool {
        if self.in_flight {
            log::debug!("Transition already in progress, ignoring request for {url}");
            return false;
        }

        self.in_flight = true;
        self.destination = Some(url);
        self.retract_timer.cancel();
        self.phase = OverlayPhase::Revealing;
        self.sync_overlay(doc);
        self.reveal_timer.schedule(now, self.config.duration);
        true
    }

    fn hide_overlay(&mut self, now: Duration, doc: &mut dyn Document) {
        self.reveal_timer.cancel();
        self.phase = OverlayPhase::Retracting;
        self.sync_overlay(doc);
        self.retract_timer.schedule(now, self.config.duration);
    }

    fn sync_overlay(&self, doc: &mut dyn Document) {
        let shown = matches!(self.phase, OverlayPhase::Revealing | OverlayPhase::Covering);
        doc.set_class(OVERLAY_ID, "visible", shown);
        doc.set_attribute(
            OVERLAY_ID,
            "aria-hidden",
            if self.phase == OverlayPhase::Hidden { "true" } else { "false" },
        );
        doc.set_attribute(OVERLAY_ID, "data-phase", self.phase.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{InMemoryDocument, InMemoryNavigator};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn setup() -> (PageTransitions, InMemoryDocument, InMemoryNavigator) {
        let mut doc = InMemoryDocument::new();
        let transitions = PageTransitions::attach(&mut doc, TransitionConfig::default());
        (transitions, doc, InMemoryNavigator::new())
    }

    #[test]
    fn attach_creates_hidden_overlay() {
        let (_, doc, _) = setup();
        assert!(doc.has_element(OVERLAY_ID));
        assert_eq!(doc.attribute(OVERLAY_ID, "aria-hidden"), Some("true"));
        assert!(!doc.has_class(OVERLAY_ID, "visible"));
    }

    #[test]
    fn navigates_after_reveal_duration() {
        let (mut t, mut doc, mut nav) = setup();

        assert!(t.navigate_to_sector("layerlens", ms(0), &mut doc));
        assert!(doc.has_class(OVERLAY_ID, "visible"));
        assert_eq!(t.tick(ms(399), &mut doc, &mut nav), TickOutcome::Idle);
        assert!(nav.history().is_empty());

        assert_eq!(
            t.tick(ms(400), &mut doc, &mut nav),
            TickOutcome::Navigated("layerlens.html".into())
        );
        assert_eq!(nav.current(), Some("layerlens.html"));
        assert_eq!(t.phase(), OverlayPhase::Covering);
    }

    #[test]
    fn second_request_is_ignored_while_in_flight() {
        let (mut t, mut doc, mut nav) = setup();

        assert!(t.navigate_to_sector("layerlens", ms(0), &mut doc));
        assert!(!t.navigate_to_sector("eco-aid", ms(100), &mut doc));
        assert!(!t.navigate_back(ms(100), &mut doc));

        t.tick(ms(400), &mut doc, &mut nav);
        assert_eq!(nav.history(), ["layerlens.html".to_string()]);
    }

    #[test]
    fn failure_retracts_overlay_and_allows_retry() {
        let (mut t, mut doc, mut nav) = setup();
        nav.fail_next("blocked");

        t.navigate_to_sector("eco-aid", ms(0), &mut doc);
        let outcome = t.tick(ms(400), &mut doc, &mut nav);
        assert_eq!(
            outcome,
            TickOutcome::Failed(CoreError::NavigationFailed("blocked".into()))
        );
        assert!(!t.is_transitioning());
        assert_eq!(t.phase(), OverlayPhase::Retracting);
        assert!(!doc.has_class(OVERLAY_ID, "visible"));

        t.tick(ms(800), &mut doc, &mut nav);
        assert_eq!(t.phase(), OverlayPhase::Hidden);
        assert_eq!(doc.attribute(OVERLAY_ID, "aria-hidden"), Some("true"));

        assert!(t.navigate_to_sector("eco-aid", ms(900), &mut doc));
        assert_eq!(
            t.tick(ms(1300), &mut doc, &mut nav),
            TickOutcome::Navigated("eco-aid.html".into())
        );
    }

    #[test]
    fn back_targets_home_document() {
        let (mut t, mut doc, mut nav) = setup();
        t.navigate_back(ms(0), &mut doc);
        t.tick(ms(400), &mut doc, &mut nav);
        assert_eq!(nav.current(), Some("index.html"));
    }

    #[test]
    fn parses_both_link_formats() {
        assert_eq!(parse_link("#layerlens"), Ok(LinkTarget::Sector("layerlens".into())));
        assert_eq!(parse_link("eco-aid.html"), Ok(LinkTarget::Sector("eco-aid".into())));
        assert_eq!(parse_link("./neptune-studio.html"), Ok(LinkTarget::Sector("neptune-studio".into())));
        assert_eq!(parse_link("index.html"), Ok(LinkTarget::Home));
        assert_eq!(parse_link("./"), Ok(LinkTarget::Home));
        assert!(matches!(parse_link("#"), Err(CoreError::InvalidLink(_))));
        assert!(matches!(parse_link("https://example.com"), Err(CoreError::InvalidLink(_))));
    }

    #[test]
    fn handle_link_routes_through_parser() {
        let (mut t, mut doc, _) = setup();
        assert_eq!(t.handle_link("#hudson-wilder", ms(0), &mut doc), Ok(true));
        assert_eq!(t.destination(), Some("hudson-wilder.html"));
    }

    #[test]
    fn pop_state_without_state_reloads() {
        let (t, _, mut nav) = setup();
        t.handle_pop_state(Some(&serde_json::json!({"page": 1})), &mut nav);
        assert_eq!(nav.reloads(), 0);
        t.handle_pop_state(None, &mut nav);
        assert_eq!(nav.reloads(), 1);
    }

    #[test]
    fn overlay_progress_follows_reveal() {
        let (mut t, mut doc, _) = setup();
        assert!((t.overlay_progress(ms(0)) - 0.0).abs() < f32::EPSILON);
        t.navigate_to_sector("layerlens", ms(0), &mut doc);
        assert!((t.overlay_progress(ms(200)) - 0.5).abs() < 0.01);
    }
}
