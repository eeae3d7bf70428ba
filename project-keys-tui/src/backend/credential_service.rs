//! 令牌存储服务
//!
//! 使用系统钥匙串保存 API 令牌，配置文件与环境变量均未提供时使用。

use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "project-keys-tui";
const TOKEN_KEY: &str = "api_token";

/// 基于系统钥匙串的令牌存储
///
/// 使用 keyring crate 将令牌安全存储到：
/// - Windows: Credential Manager
/// - macOS: Keychain
/// - Linux: Secret Service (GNOME Keyring / KWallet)
pub struct KeyringTokenStore {
    account: String,
}

impl KeyringTokenStore {
    /// 每个 API 地址单独保存一个令牌
    pub fn new(api_base_url: &str) -> Self {
        Self {
            account: format!("{TOKEN_KEY}@{api_base_url}"),
        }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(SERVICE_NAME, &self.account).context("Failed to create keyring entry")
    }

    /// 读取令牌，不存在时返回 `None`
    pub fn get(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to load token from keyring"),
        }
    }

    pub fn set(&self, token: &str) -> Result<()> {
        self.entry()?
            .set_password(token)
            .context("Failed to save token to keyring")
    }
}
