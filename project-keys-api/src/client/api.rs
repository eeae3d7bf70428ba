//! `KeyApi` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::KeyApi;
use crate::types::{EditableFields, KeyLocator, KeyPatch, KeyRecord};

use super::HttpKeyApi;
use super::routes::{key_path, update_path};

#[async_trait]
impl KeyApi for HttpKeyApi {
    async fn get_key(&self, key: &KeyLocator) -> Result<KeyRecord> {
        log::info!("Fetching key {key}");
        self.get(&key_path(key)).await
    }

    async fn update_key(&self, key: &KeyLocator, fields: &EditableFields) -> Result<KeyPatch> {
        log::info!(
            "Updating key {key} (route: {:?}, active: {})",
            self.save_route,
            fields.is_active
        );
        self.put(&update_path(key, self.save_route), fields).await
    }

    async fn delete_key(&self, key: &KeyLocator) -> Result<()> {
        log::info!("Revoking key {key}");
        self.delete(&key_path(key)).await
    }
}
