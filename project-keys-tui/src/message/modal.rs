//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗（等同于拒绝确认）
    Close,

    /// 确认当前焦点按钮
    Confirm,

    /// 直接回答确认框（y / n）
    Answer(bool),

    /// 在确认弹窗中切换焦点
    ToggleFocus,
}
