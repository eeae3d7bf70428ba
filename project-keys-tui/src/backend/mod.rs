//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责配置、凭证与网络请求。
//! 通过 project-keys-core 的状态机与 project-keys-api 的 HTTP 客户端
//! 实现真实的 Key 管理功能。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;         // 配置服务（JSON 文件）
//!         mod credential_service;     // 令牌存储（keyring）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、请求调度（Backend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环是同步的，网络请求跑在 Backend 自带的 tokio 运行时上：
//!
//!     用户按下 Ctrl+s
//!         ↓
//!     Update 层调用 form.begin_save()，得到 SaveRequest
//!         ↓
//!     backend.save(request)：在运行时上 spawn 一个任务
//!         ↓
//!     任务完成后通过 mpsc 发回 BackendMessage::Saved
//!         ↓
//!     主循环 try_recv() 取出消息，交给 Update 层 finish_save
//!         ↓
//!     View 层重新渲染
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置与令牌
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     令牌来源优先级：命令行 / 环境变量 > 配置文件 > 系统钥匙串
//!

mod config_service;
mod credential_service;

pub use config_service::{config_dir, AppConfig, ConfigService, LocalConfigService};
pub use credential_service::KeyringTokenStore;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use project_keys_api::{HttpKeyApi, KeyApi};
use project_keys_core::{
    FetchRequest, HistoryNavigator, InMemoryIndicatorStore, PageContext, RevokeRequest,
    SaveRequest,
};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::i18n::TuiTranslator;
use crate::message::BackendMessage;

/// 请求调度器
///
/// 持有 tokio 运行时与页面上下文，请求结果通过通道回到主循环。
pub struct Backend {
    runtime: Runtime,
    ctx: Arc<PageContext>,
    indicators: Arc<InMemoryIndicatorStore>,
    navigator: Arc<HistoryNavigator>,
    tx: UnboundedSender<BackendMessage>,
    rx: UnboundedReceiver<BackendMessage>,
}

impl Backend {
    /// 按配置创建 HTTP 客户端
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut builder = HttpKeyApi::builder(config.api_base_url.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .save_route(config.save_route);
        if let Some(token) = &config.api_token {
            builder = builder.token(token.as_str());
        }
        let api = builder.build()?;
        log::info!(
            "Using API {} (save route: {:?})",
            api.base_url(),
            api.save_route()
        );
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<dyn KeyApi>) -> Result<Self> {
        let runtime = Runtime::new()?;
        let indicators = Arc::new(InMemoryIndicatorStore::new());
        let navigator = Arc::new(HistoryNavigator::new());
        let ctx = Arc::new(PageContext::new(
            api,
            indicators.clone(),
            navigator.clone(),
            Arc::new(TuiTranslator),
        ));
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            ctx,
            indicators,
            navigator,
            tx,
            rx,
        })
    }

    pub fn context(&self) -> Arc<PageContext> {
        Arc::clone(&self.ctx)
    }

    pub fn indicators(&self) -> Arc<InMemoryIndicatorStore> {
        Arc::clone(&self.indicators)
    }

    pub fn navigator(&self) -> Arc<HistoryNavigator> {
        Arc::clone(&self.navigator)
    }

    /// GET 当前 Key
    pub fn fetch(&self, request: FetchRequest) {
        let api = Arc::clone(&self.ctx.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = request.send(api.as_ref()).await;
            send(&tx, BackendMessage::Fetched {
                key: request.key,
                result,
            });
        });
    }

    /// PUT 可编辑字段
    pub fn save(&self, request: SaveRequest) {
        let api = Arc::clone(&self.ctx.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = request.send(api.as_ref()).await;
            send(&tx, BackendMessage::Saved {
                key: request.key,
                result,
            });
        });
    }

    /// DELETE 当前 Key
    pub fn revoke(&self, request: RevokeRequest) {
        let api = Arc::clone(&self.ctx.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = request.send(api.as_ref()).await;
            send(&tx, BackendMessage::Revoked {
                key: request.key,
                result,
            });
        });
    }

    /// 取出一条已完成的请求结果（非阻塞）
    pub fn try_recv(&mut self) -> Option<BackendMessage> {
        self.rx.try_recv().ok()
    }
}

fn send(tx: &UnboundedSender<BackendMessage>, msg: BackendMessage) {
    // 主循环已退出时接收端被丢弃
    if tx.send(msg).is_err() {
        log::debug!("Backend result dropped: UI loop has exited");
    }
}
