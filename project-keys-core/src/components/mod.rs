//! 页面组件状态机
//!
//! [`KeyDetailContainer`] owns the fetched record and hands an immutable
//! snapshot to [`KeySettingsForm`], which owns the local edit state.

mod key_detail;
mod key_settings;

pub use key_detail::{FetchRequest, KeyDetailContainer, KeyDetailView, LoadPhase};
pub use key_settings::{
    Confirmation, FieldChange, FormPhase, KeySettingsForm, KeySettingsProps, RevokeRequest,
    SaveRequest,
};

use std::borrow::Cow;
use std::sync::Arc;

use project_keys_api::KeyApi;

use crate::traits::{IdentityTranslator, IndicatorStore, Navigator, Translator};

/// 页面上下文 - 持有所有协作方
///
/// 前端创建此上下文并注入自己的实现。
pub struct PageContext {
    /// Key API 客户端
    pub api: Arc<dyn KeyApi>,
    /// 临时提示存储
    pub indicators: Arc<dyn IndicatorStore>,
    /// 页面跳转
    pub navigator: Arc<dyn Navigator>,
    /// 文案翻译
    pub translator: Arc<dyn Translator>,
}

impl PageContext {
    #[must_use]
    pub fn new(
        api: Arc<dyn KeyApi>,
        indicators: Arc<dyn IndicatorStore>,
        navigator: Arc<dyn Navigator>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            api,
            indicators,
            navigator,
            translator,
        }
    }

    /// 不翻译文案的上下文
    #[must_use]
    pub fn untranslated(
        api: Arc<dyn KeyApi>,
        indicators: Arc<dyn IndicatorStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::new(api, indicators, navigator, Arc::new(IdentityTranslator))
    }

    pub fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.translator.translate(text)
    }
}
