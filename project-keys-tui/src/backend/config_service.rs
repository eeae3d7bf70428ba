//! 配置服务
//!
//! 配置文件位置：`<config_dir>/project-keys/config.json`，所有字段可选。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use project_keys_api::{SaveRoute, DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT_SECS};
use project_keys_core::types::Access;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

const CONFIG_DIR_NAME: &str = "project-keys";
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// 为空时回退到系统钥匙串
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    pub save_route: SaveRoute,
    pub language: String,
    pub theme: Theme,
    /// 当前用户在项目上的权限；加入 `project:admin` 才显示吊销入口
    pub capabilities: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            api_token: None,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            save_route: SaveRoute::default(),
            language: "en-US".to_string(),
            theme: Theme::Dark,
            capabilities: vec!["project:read".to_string(), "project:write".to_string()],
        }
    }
}

impl AppConfig {
    /// 命令行 / 环境变量覆盖配置文件
    pub fn apply_overrides(&mut self, api_url: Option<String>, token: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.api_token = Some(token);
        }
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    pub fn access(&self) -> Access {
        self.capabilities.iter().map(String::as_str).collect()
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置路径
    pub fn new() -> Result<Self> {
        let dir = config_dir().context("Unable to determine the config directory")?;
        Ok(Self::with_path(dir.join(CONFIG_FILE_NAME)))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// `<config_dir>/project-keys`，日志文件也放在这里
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME))
}
