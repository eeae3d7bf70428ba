use async_trait::async_trait;

use crate::error::Result;
use crate::types::{EditableFields, KeyLocator, KeyPatch, KeyRecord};

/// Project key API.
///
/// Implemented by [`HttpKeyApi`](crate::HttpKeyApi); front-ends and tests can
/// supply their own implementation.
#[async_trait]
pub trait KeyApi: Send + Sync {
    /// `GET /projects/{org}/{project}/keys/{key}/`
    async fn get_key(&self, key: &KeyLocator) -> Result<KeyRecord>;

    /// Persist the editable fields; returns the (possibly partial) record the
    /// server sent back.
    async fn update_key(&self, key: &KeyLocator, fields: &EditableFields) -> Result<KeyPatch>;

    /// `DELETE /projects/{org}/{project}/keys/{key}/`
    async fn delete_key(&self, key: &KeyLocator) -> Result<()>;
}
