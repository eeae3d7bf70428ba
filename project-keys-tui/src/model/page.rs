//! 页面状态定义

use project_keys_api::KeyLocator;

use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Key 详情页
    KeyDetails { key: KeyLocator },
    /// 项目的 Key 列表（吊销后跳转）
    KeyList { location: String },
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Page::KeyDetails { .. } => t().details.title,
            Page::KeyList { .. } => t().key_list.title,
        }
    }

    /// 是否是 Key 详情页
    pub fn is_key_details(&self) -> bool {
        matches!(self, Page::KeyDetails { .. })
    }

    /// 当前页面是否属于 `key`
    pub fn shows(&self, key: &KeyLocator) -> bool {
        matches!(self, Page::KeyDetails { key: current } if current == key)
    }
}
