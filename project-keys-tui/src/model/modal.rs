//! 弹窗状态定义

/// 弹窗枚举
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 吊销确认
    ConfirmRevoke {
        /// 已翻译的确认问题
        prompt: String,
        /// 0 = 取消，1 = 确认
        focus: usize,
    },
    /// 帮助
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示吊销确认弹窗，焦点默认在“取消”
    pub fn show_confirm_revoke(&mut self, prompt: impl Into<String>) {
        self.active = Some(Modal::ConfirmRevoke {
            prompt: prompt.into(),
            focus: 0,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
