//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 页面 + 状态栏 + 弹窗
//!         mod components;     // 状态栏、弹窗
//!         mod pages;          // Key 详情页、Key 列表页
//!         pub mod theme;      // 主题和样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
