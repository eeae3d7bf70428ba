//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! Backend 层的异步请求结果同样以消息形式回到主循环。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod backend;        // 异步请求结果
//!         mod content;        // 内容面板（表单）子消息
//!         mod modal;          // 弹窗子消息
//!
//!
//!     在 src/event/handler.rs 中，有：
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage {
//!             match event {
//!                 Event::Key(key) if ... => AppMessage::...,
//!                 _ => AppMessage::Noop
//!             }
//!         }
//!
//!     在 src/app.rs 主循环中，有：
//!         while let Some(msg) = backend.try_recv() {
//!             update::update(app, backend, AppMessage::Backend(msg));
//!         }
//!
//!
//! 最后，消息被传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod backend;
mod content;
mod modal;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
