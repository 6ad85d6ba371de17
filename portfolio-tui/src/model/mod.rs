//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod home;           // 首页卡片选择
//!         mod page;           // 页面路由
//!         mod pointer;        // 鼠标指针所处区域
//!         mod session;        // 当前页面会话（文档 + 切换控制器 + 侧边栏）
//!
//!     Page 与 PageSession 的区别：
//!         - Page 只是 "门牌号"（Home / Sector(id)）；
//!         - PageSession 是这次加载得到的全部内容：渲染后的文档、
//!             页面切换控制器和侧边栏。每次导航都会整体替换。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,
//!             pub now: Duration,                  // 主循环写入的单调时间
//!             pub viewport: Rect,                 // 终端尺寸（命中测试用）
//!             pub renderer: SectorPage,           // 持有作品目录
//!             pub navigator: HostNavigator,       // 历史栈 + 待加载页面
//!             pub session: PageSession,           // 当前页面
//!             pub home: HomeState,                // 首页选中卡片
//!             pub scroll: u16,                    // 详情页滚动
//!             pub pointer: PointerState,          // 指针在面板 / peek 按钮上
//!             ...
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、时间
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     core 中的状态机不读取时钟。app.rs 在每次 update 前写入 app.now，
//!     update 层把它原样传给 sidebar / transitions。测试中直接设置 app.now。
//!

mod app;
mod home;
mod page;
mod pointer;
mod session;

pub use app::App;
pub use home::HomeState;
pub use page::Page;
pub use pointer::PointerState;
pub use session::{PageSession, SidebarLink, CARDS_ID, CARD_PREFIX, SIDEBAR_LINK_PREFIX};
