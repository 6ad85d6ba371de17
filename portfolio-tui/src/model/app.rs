//! 应用主状态结构

use std::sync::Arc;
use std::time::Duration;

use portfolio_core::sidebar::HostCapabilities;
use portfolio_core::{SectorCatalog, SectorPage};
use ratatui::layout::Rect;

use super::{HomeState, Page, PageSession, PointerState};
use crate::backend::{open_page, AppConfig, HostNavigator};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 启动以来的单调时间（主循环在每次更新前写入）
    pub now: Duration,

    /// 终端尺寸
    pub viewport: Rect,

    pub config: AppConfig,
    pub capabilities: HostCapabilities,

    /// 详情页渲染器（持有目录）
    pub renderer: SectorPage,
    pub navigator: HostNavigator,

    /// 当前页面会话
    pub session: PageSession,

    // === 各页面状态 ===
    pub home: HomeState,
    /// 详情页滚动偏移
    pub scroll: u16,

    pub pointer: PointerState,

    /// 是否显示帮助
    pub show_help: bool,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例，打开首页
    pub fn new(config: AppConfig, catalog: SectorCatalog, viewport: Rect) -> Self {
        // 终端没有触摸输入
        let capabilities = HostCapabilities { touch: false };
        let renderer = SectorPage::new(Arc::new(catalog));
        let session = open_page(Page::Home, &renderer, &config, capabilities);

        Self {
            should_quit: false,
            now: Duration::ZERO,
            viewport,
            config,
            capabilities,
            renderer,
            navigator: HostNavigator::new(Page::Home),
            session,
            home: HomeState::default(),
            scroll: 0,
            pointer: PointerState::default(),
            show_help: false,
            status_message: None,
        }
    }

    /// 整页加载：替换会话并重置页面状态
    pub fn load_page(&mut self, page: Page) {
        self.session.sidebar.destroy();
        self.session = open_page(page, &self.renderer, &self.config, self.capabilities);
        self.scroll = 0;
        self.pointer = PointerState::default();
        if self.session.page == Page::Home {
            let count = self.session.card_sector_ids().len();
            self.home.select(self.home.selected, count);
        }
    }

    pub fn catalog(&self) -> &SectorCatalog {
        self.renderer.catalog()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
