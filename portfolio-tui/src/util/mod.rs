//!
//! src/util/mod.rs
//! Util 层：终端与日志
//!
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod logging;        // tracing 初始化（写入日志文件）
//!
//!
//!     终端（terminal.rs）：
//!         除了原始模式和备用屏幕，还打开两类事件上报：
//!
//!         · EnableMouseCapture
//!             指针移动（含无按键的移动）会被上报，
//!             update 层把列号换算成像素后交给侧边栏做近距离感应。
//!
//!         · EnableFocusChange
//!             终端失去焦点时上报 FocusLost，
//!             视为 "指针离开文档" 加 "页面不可见"，侧边栏随即收起。
//!
//!         restore_terminal 按相反顺序关闭它们。main.rs 在 app::run 返回后
//!         立即调用，run 出错时也一样，否则终端会停在原始模式。
//!
//!
//!     日志（logging.rs）：
//!         stdout 被界面占用，日志写入缓存目录下的文件：
//!
//!             <cache_dir>/portfolio-tui/portfolio-tui.log
//!
//!         过滤规则取自环境变量 PORTFOLIO_LOG（默认 info）。
//!         portfolio-core 使用 log 门面，其记录经 tracing-subscriber 转发到同一文件。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
