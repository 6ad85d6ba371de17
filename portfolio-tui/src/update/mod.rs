//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ HomeMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ SidebarMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ PointerMsg│   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 同步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │    portfolio-     │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod home;               // 首页卡片选择 / 打开
//!         mod content;            // 详情页滚动
//!         mod sidebar;            // 侧边栏按键、链接焦点与激活
//!         mod pointer;            // 鼠标移动与点击（命中测试）
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!         使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!         复杂的子消息委托给子模块处理。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! Tick
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环每轮发送一次 AppMessage::Tick：
//!
//!         sidebar.tick(now , doc)                     // 动画结束 / 延迟隐藏 / peek / 防抖
//!         transitions.tick(now , doc , navigator)     // 遮罩展开完毕后导航
//!             ├─ Navigated(url)   → navigator 中有待加载页面
//!             └─ Failed(e)        → 状态栏提示，遮罩收起，可重试
//!         navigator.take_pending()                    // 有则整页加载
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 链接
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     首页卡片（#<id>）、侧边栏链接（<id>.html / index.html）统一走
//!     open_link() → PageTransitions::handle_link()。
//!     无法解析的链接只在状态栏提示，不导航。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!




mod content;
mod home;
mod pointer;
mod sidebar;

use portfolio_core::services::TickOutcome;
use portfolio_core::CoreError;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;




/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Tick => tick(app),

        AppMessage::Home(home_msg) => {
            home::update(app, home_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Sidebar(sidebar_msg) => {
            sidebar::update(app, sidebar_msg);
        }

        AppMessage::Pointer(pointer_msg) => {
            pointer::update(app, pointer_msg);
        }

        AppMessage::GoBack => go_back(app),

        AppMessage::HistoryBack => {
            // 浏览器后退不带状态：重新加载历史中的上一页
            if app.navigator.go_back() {
                app.session
                    .transitions
                    .handle_pop_state(None, &mut app.navigator);
            }
        }

        AppMessage::ToggleHelp => {
            app.show_help = !app.show_help;
        }

        AppMessage::Resized { width, height } => {
            app.viewport.width = width;
            app.viewport.height = height;
            app.session.sidebar.resize(app.now);
        }

        AppMessage::FocusChanged(focused) => {
            let now = app.now;
            let session = &mut app.session;
            if !focused {
                session.sidebar.pointer_leave_document(now);
                app.pointer = Default::default();
            }
            session
                .sidebar
                .visibility_change(!focused, now, &mut session.document);
        }

        AppMessage::Noop => {}
    }
}

/// 推进计时器，必要时加载新页面
fn tick(app: &mut App) {
    let now = app.now;
    let session = &mut app.session;

    session.sidebar.tick(now, &mut session.document);
    for notification in session.sidebar.drain_notifications() {
        tracing::debug!(
            kind = notification.kind.as_str(),
            panel = %notification.panel_id,
            "sidebar notification"
        );
    }

    let outcome = session
        .transitions
        .tick(now, &mut session.document, &mut app.navigator);

    match outcome {
        TickOutcome::Idle => {}
        TickOutcome::Navigated(url) => {
            tracing::debug!(%url, "navigation committed");
            app.clear_status();
        }
        TickOutcome::Failed(e) => report(app, t().status_bar.navigation_failed, &e),
    }

    if let Some(page) = app.navigator.take_pending() {
        app.load_page(page);
    }
}

/// 详情页返回首页（带遮罩动画）
fn go_back(app: &mut App) {
    if !app.session.page.is_detail_page() {
        return;
    }
    let now = app.now;
    let session = &mut app.session;
    session.transitions.navigate_back(now, &mut session.document);
}

/// 通过页面切换控制器打开链接
fn open_link(app: &mut App, href: &str) {
    let now = app.now;
    let session = &mut app.session;
    if let Err(e) = session.transitions.handle_link(href, now, &mut session.document) {
        report(app, t().status_bar.invalid_link, &e);
    }
}

/// 记录错误并显示在状态栏
fn report(app: &mut App, prefix: &str, e: &CoreError) {
    if e.is_expected() {
        tracing::warn!("{prefix}: {e}");
    } else {
        tracing::error!("{prefix}: {e}");
    }
    app.set_status(format!("{prefix}: {e}"));
}
