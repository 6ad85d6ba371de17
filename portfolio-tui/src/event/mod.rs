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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘 / 鼠标 / 终端焦点等输入事件转换为 Message。
//! 
//! 
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event}; 
//! 
//! 
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!             
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//! 
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!         timeout 取 16ms：侧边栏与遮罩的动画需要按帧推进。
//! 
//! 
//!         · handle_event    事件分发
//! 
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Mouse(MouseEvent)            // 鼠标事件：移动 / 左键 / 滚轮
//!             Event::Resize(width , height)       // 终端尺寸变化，侧边栏据此防抖刷新
//!             Event::FocusLost / FocusGained      // 终端焦点，相当于浏览器的页面可见性
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 帮助打开时，只接受关闭帮助；
//!                 - 全局快捷键，就地处理；
//!                 - Alt+s / Esc / Tab，包装成 SidebarMessage::Key 交给侧边栏；
//!                 - 侧边栏显示时，↑↓ / Enter 作用于侧边栏链接；
//!                 - 否则按当前页面（首页 / 详情页）处理。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 鼠标与像素坐标
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Event 层只上报单元格坐标（column , row）。
//!     换算成像素（每格 8×16）并判断 "进入 / 离开面板" 的工作在
//!     src/update/pointer.rs 中完成，因为那需要读取布局。
//! 

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
