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
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ BackendMsg│   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └─────▲─────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ─┼────────┘      └────┬─────┘         │   │
//！│  │        │                      │                    │               │   │
//！│  └────────│──────────────────────│────────────────────│───────────────┘   │
//！│           │                      │ 请求结果            │ begin_* 请求      │
//！│           ▼                      │                    ▼                   │
//！│      ┌─────────┐                 │              ┌──────────┐              │
//！│      │  终端   │                 └───────────── │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ project-keys-core │           │
//！│                                           │ project-keys-api  │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
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
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(Width , height)       // 终端窗口大小发生变化，重绘终端
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键，就地处理；
//!                 - 否则按详情页的加载阶段分发：
//!                     Error   → handle_error_keys（重试）
//!                     Ready   → handle_form_keys（表单编辑）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Tab / ↓         → ContentMessage::NextField
//!         Shift+Tab / ↑   → ContentMessage::PrevField
//!         Enter           → ContentMessage::Activate
//!         Ctrl+s          → ContentMessage::Save
//!         Alt+d           → ContentMessage::Revoke
//!         Alt+s           → ContentMessage::ToggleSecrets
//!
//!     焦点在名称输入框时，字符键是输入；否则 Space 切换开关，? 打开帮助。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
