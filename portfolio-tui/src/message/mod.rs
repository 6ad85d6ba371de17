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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod home;           // 首页卡片列表
//!         mod content;        // 详情页滚动
//!         mod sidebar;        // 侧边栏按键与链接焦点
//!         mod pointer;        // 鼠标移动与点击
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             Tick,                               // 推进计时器
//!             Home(HomeMessage),                  // 首页子消息
//!             Content(ContentMessage),            // 详情页子消息
//!             Sidebar(SidebarMessage),            // 侧边栏子消息
//!             Pointer(PointerMessage),            // 鼠标子消息
//!             GoBack,                             // 返回首页
//!             HistoryBack,                        // 历史后退
//!             ToggleHelp,                         // 帮助
//!             Resized { .. },                     // 终端尺寸变化
//!             FocusChanged(bool),                 // 终端焦点（相当于页面可见性）
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     与侧边栏有关的按键（Alt+s、Esc、Tab）不在 Event 层做决定，
//!     而是原样包进 SidebarMessage::Key 交给 core 的 ProximitySidebar；
//!     侧边栏不处理（KeyOutcome::Ignored）时，Update 层再执行默认行为。
//!     这与浏览器中 "preventDefault 之后不再执行默认动作" 是同一个约定。
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod content;
mod home;
mod pointer;
mod sidebar;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use home::HomeMessage;
pub use pointer::PointerMessage;
pub use sidebar::SidebarMessage;
