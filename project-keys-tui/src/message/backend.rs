//! 异步请求结果消息

use project_keys_api::{KeyLocator, KeyPatch, KeyRecord, Result as ApiResult};

/// Backend 任务完成后发回主循环的消息
///
/// 都带上请求针对的 Key，页面已切换时由 Update 层丢弃。
#[derive(Debug, Clone)]
pub enum BackendMessage {
    Fetched {
        key: KeyLocator,
        result: ApiResult<KeyRecord>,
    },
    Saved {
        key: KeyLocator,
        result: ApiResult<KeyPatch>,
    },
    Revoked {
        key: KeyLocator,
        result: ApiResult<()>,
    },
}

impl BackendMessage {
    pub fn key(&self) -> &KeyLocator {
        match self {
            Self::Fetched { key, .. } | Self::Saved { key, .. } | Self::Revoked { key, .. } => key,
        }
    }
}
