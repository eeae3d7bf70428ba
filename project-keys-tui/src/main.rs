//! Project Keys TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、令牌与网络请求 (`backend/`)
//!
//!
//! main.rs
//! Project Keys TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 解析命令行：Key 路由或 org/project/key 三元组
//!     load config             // 读取配置文件，命令行 / 环境变量覆盖
//!     init_logging()          // 日志写入配置目录
//!     Backend::new()          // HTTP 客户端 + tokio 运行时
//!     model::App::new()       // 创建 APP 实例，并发起首次加载
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 用法：
//!     project-keys acme/web/settings/keys/3f1c
//!     project-keys acme web 3f1c --api-url https://errors.example.com/api/0

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use project_keys_api::KeyLocator;
use project_keys_core::types::parse_key_route;

use backend::{config_dir, AppConfig, Backend, ConfigService, KeyringTokenStore, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

/// 查看、编辑与吊销项目的客户端 Key
#[derive(Debug, Parser)]
#[command(name = "project-keys", version, about)]
struct Cli {
    /// Key 路由（`org/project/settings/keys/key`）或 `org project key`
    #[arg(required = true, num_args = 1..=3, value_name = "KEY")]
    target: Vec<String>,

    /// API 地址，覆盖配置文件
    #[arg(long, env = "PROJECT_KEYS_API_URL")]
    api_url: Option<String>,

    /// API 令牌，覆盖配置文件与钥匙串
    #[arg(long, env = "PROJECT_KEYS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// 把 --token 保存到系统钥匙串
    #[arg(long, requires = "token")]
    remember_token: bool,

    /// 配置文件路径
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    let key = resolve_key(&cli.target)?;

    // 1. 读取配置
    let config_service = match &cli.config {
        Some(path) => LocalConfigService::with_path(path),
        None => LocalConfigService::new()?,
    };
    let first_run = !config_service.path().exists();
    let mut config = config_service.load()?;
    // 在命令行覆盖之前保留一份，令牌不会被写进文件
    let defaults = first_run.then(|| config.clone());
    config.apply_overrides(cli.api_url.clone(), cli.token.clone());

    // 2. 初始化日志（终端被 UI 占用，只写文件）
    let log_dir = config_service
        .path()
        .parent()
        .map(PathBuf::from)
        .or_else(config_dir)
        .context("Unable to determine the log directory")?;
    let log_path = init_logging(&log_dir)?;
    tracing::info!(
        "Starting project-keys {} for {key}, logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_path.display()
    );

    // 首次运行写出默认配置，方便用户修改
    if let Some(defaults) = defaults {
        match config_service.save(&defaults) {
            Ok(()) => tracing::info!("Wrote default config to {}", config_service.path().display()),
            Err(e) => tracing::warn!("{e:#}"),
        }
    }

    // 3. 令牌
    resolve_token(&mut config, cli.remember_token);

    // 4. 语言与主题
    let language = config.language();
    tracing::info!("Language: {}", language.code());
    i18n::set_language(language);
    view::theme::set_theme(config.theme);

    // 5. Backend 与应用状态
    let mut backend = Backend::new(&config)?;
    let mut app = model::App::new(
        backend.context(),
        backend.indicators(),
        backend.navigator(),
        key,
        config.access(),
    );
    update::start_fetch(&mut app, &backend);

    // 6. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}

/// 解析命令行中的 Key
fn resolve_key(target: &[String]) -> Result<KeyLocator> {
    match target {
        [route] => Ok(parse_key_route(route)?),
        [org, project, key] => Ok(KeyLocator::new(org.as_str(), project.as_str(), key.as_str())),
        _ => anyhow::bail!("expected a key route or `<org> <project> <key>`"),
    }
}

/// 配置与命令行都没有令牌时从钥匙串读取；`--remember-token` 时写入钥匙串
fn resolve_token(config: &mut AppConfig, remember: bool) {
    let store = KeyringTokenStore::new(&config.api_base_url);

    if remember {
        if let Some(token) = &config.api_token {
            match store.set(token) {
                Ok(()) => tracing::info!("API token saved to keyring"),
                Err(e) => tracing::warn!("{e:#}"),
            }
        }
    }

    if config.api_token.is_some() {
        return;
    }
    match store.get() {
        Ok(Some(token)) => {
            tracing::info!("Using API token from keyring");
            config.api_token = Some(token);
        }
        Ok(None) => tracing::info!("No API token configured, sending anonymous requests"),
        Err(e) => tracing::warn!("{e:#}"),
    }
}
