//! 应用主消息枚举

use super::{BackendMessage, ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 异步请求完成
    Backend(BackendMessage),

    /// 关闭弹窗或清除状态
    GoBack,

    /// 重新加载当前 Key
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
