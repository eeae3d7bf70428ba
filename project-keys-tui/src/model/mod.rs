//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 页面本身的业务状态（加载阶段、表单、保存/吊销中）由
//! project-keys-core 的 `KeyDetailContainer` 持有，这里只补充终端界面
//! 自己的状态：焦点、弹窗、状态栏消息。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 表单焦点
//!         mod modal;          // 弹窗状态
//!         mod page;           // 页面路由状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub current_page: Page,                 // 当前页面
//!             pub focus: FormFocus,                   // 表单焦点
//!             pub key_details: KeyDetailContainer,    // Key 详情页状态机
//!             pub modal: ModalState,                  // 弹窗状态
//!             ...
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、页面状态（Page）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - KeyDetails { key }：Key 详情页（启动页）
//!     - KeyList { location }：吊销成功后跳转到的列表页
//!
//!     页面切换由核心库的 Navigator 驱动：
//!         吊销成功
//!             ↓
//!         KeyDetailContainer::handle_remove() 调用 navigator.push(...)
//!             ↓
//!         update 层读取 navigator.current()，切换 current_page
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - ConfirmRevoke { prompt, focus }：吊销确认
//!     - Help：帮助
//!

mod app;
mod focus;
mod modal;
mod page;

pub use app::App;
pub use focus::FormFocus;
pub use modal::{Modal, ModalState};
pub use page::Page;
