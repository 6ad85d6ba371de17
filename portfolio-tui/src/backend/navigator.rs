//! 宿主导航器
//!
//! 实现 portfolio-core 的 `Navigator` trait。
//! 终端里没有真正的 "整页跳转"：导航只记录目标页面，
//! 由主循环在 tick 之后取走并重新加载整个页面会话。

use portfolio_core::services::{parse_link, LinkTarget};
use portfolio_core::{CoreError, CoreResult, Navigator};

use crate::model::Page;

/// 历史栈上限，超出后丢弃最早的记录
const HISTORY_LIMIT: usize = 50;

/// 带历史栈的导航器
#[derive(Debug)]
pub struct HostNavigator {
    /// 历史栈，末尾为当前页面
    history: Vec<Page>,
    /// 等待加载的页面
    pending: Option<Page>,
}

impl HostNavigator {
    pub fn new(start: Page) -> Self {
        Self {
            history: vec![start],
            pending: None,
        }
    }

    /// 地址 → 页面
    pub fn page_for_url(url: &str) -> CoreResult<Page> {
        match parse_link(url) {
            Ok(LinkTarget::Home) => Ok(Page::Home),
            Ok(LinkTarget::Sector(id)) => Ok(Page::Sector(id)),
            Err(e) => Err(CoreError::NavigationFailed(e.to_string())),
        }
    }

    pub fn current(&self) -> Option<&Page> {
        self.history.last()
    }

    /// 历史后退：只移动历史指针，不加载页面
    ///
    /// 已在最早的页面时返回 `false`。
    pub fn go_back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }

    /// 取走等待加载的页面
    pub fn take_pending(&mut self) -> Option<Page> {
        self.pending.take()
    }
}

impl Navigator for HostNavigator {
    fn navigate(&mut self, url: &str) -> CoreResult<()> {
        let page = Self::page_for_url(url)?;
        tracing::info!("Loading {url}");
        self.history.push(page.clone());
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        self.pending = Some(page);
        Ok(())
    }

    fn reload(&mut self) {
        self.pending = self.current().cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_map_to_pages() {
        assert_eq!(HostNavigator::page_for_url("index.html").unwrap(), Page::Home);
        assert_eq!(
            HostNavigator::page_for_url("eco-aid.html").unwrap(),
            Page::Sector("eco-aid".into())
        );
        assert!(matches!(
            HostNavigator::page_for_url("mailto:someone"),
            Err(CoreError::NavigationFailed(_))
        ));
    }

    #[test]
    fn navigate_records_history_and_pending_page() {
        let mut nav = HostNavigator::new(Page::Home);
        nav.navigate("layerlens.html").unwrap();

        assert_eq!(nav.current(), Some(&Page::Sector("layerlens".into())));
        assert_eq!(nav.take_pending(), Some(Page::Sector("layerlens".into())));
        assert_eq!(nav.take_pending(), None);
    }

    #[test]
    fn back_then_reload_loads_previous_page() {
        let mut nav = HostNavigator::new(Page::Home);
        nav.navigate("layerlens.html").unwrap();
        nav.take_pending();

        assert!(nav.go_back());
        nav.reload();
        assert_eq!(nav.take_pending(), Some(Page::Home));
        assert!(!nav.go_back());
    }

    #[test]
    fn history_keeps_only_recent_pages() {
        let mut nav = HostNavigator::new(Page::Home);
        for _ in 0..HISTORY_LIMIT * 2 {
            nav.navigate("layerlens.html").unwrap();
            nav.navigate("index.html").unwrap();
        }
        assert_eq!(nav.history.len(), HISTORY_LIMIT);
        assert_eq!(nav.current(), Some(&Page::Home));

        let mut steps = 0;
        while nav.go_back() {
            steps += 1;
        }
        assert_eq!(steps, HISTORY_LIMIT - 1);
    }
}
