//! 应用主状态结构

use std::sync::Arc;

use project_keys_api::KeyLocator;
use project_keys_core::types::Access;
use project_keys_core::{
    HistoryNavigator, InMemoryIndicatorStore, Indicator, KeyDetailContainer, PageContext,
};

use super::{FormFocus, ModalState, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub current_page: Page,

    /// 表单焦点
    pub focus: FormFocus,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// Key 详情页状态机
    pub key_details: KeyDetailContainer,

    /// 是否显示私密凭证
    pub show_secrets: bool,

    /// 弹窗状态
    pub modal: ModalState,

    /// 与 PageContext 共享的提示存储
    pub indicators: Arc<InMemoryIndicatorStore>,

    /// 与 PageContext 共享的导航历史
    pub navigator: Arc<HistoryNavigator>,
}

impl App {
    /// 创建新的应用实例，停在 Key 详情页的 Loading 阶段
    pub fn new(
        ctx: Arc<PageContext>,
        indicators: Arc<InMemoryIndicatorStore>,
        navigator: Arc<HistoryNavigator>,
        key: KeyLocator,
        access: Access,
    ) -> Self {
        Self {
            should_quit: false,
            current_page: Page::KeyDetails { key: key.clone() },
            focus: FormFocus::default(),
            status_message: None,
            key_details: KeyDetailContainer::new(ctx, key, access),
            show_secrets: false,
            modal: ModalState::new(),
            indicators,
            navigator,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 当前显示的临时提示
    pub fn indicator(&self) -> Option<Indicator> {
        self.indicators.current()
    }

    /// 是否可以吊销（有 project:admin 且表单已就绪）
    pub fn can_revoke(&self) -> bool {
        self.key_details
            .form()
            .is_some_and(project_keys_core::KeySettingsForm::can_revoke)
    }
}
