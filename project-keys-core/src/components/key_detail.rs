//! Key 详情容器：加载、合并与跳转

use std::sync::Arc;

use project_keys_api::{KeyApi, KeyLocator, KeyPatch, KeyRecord, Result as ApiResult};
use serde::{Deserialize, Serialize};

use crate::components::key_settings::{KeySettingsForm, KeySettingsProps};
use crate::components::PageContext;
use crate::error::{CoreError, CoreResult};
use crate::types::{key_list_location, Access};

/// 加载阶段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    #[default]
    Loading,
    Error,
    Ready,
}

/// What the page shows for the current phase.
pub enum KeyDetailView<'a> {
    /// Spinner only.
    Loading,
    /// Load failure with a retry action.
    Error,
    Ready(&'a KeySettingsForm),
}

/// GET issued by [`KeyDetailContainer::begin_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub key: KeyLocator,
}

impl FetchRequest {
    pub async fn send(&self, api: &dyn KeyApi) -> ApiResult<KeyRecord> {
        api.get_key(&self.key).await
    }
}

/// Owns the remote state of one key page.
///
/// The record is held as an immutable snapshot; saves build a new snapshot
/// from the old one and the server's partial response.
pub struct KeyDetailContainer {
    ctx: Arc<PageContext>,
    key: KeyLocator,
    access: Access,
    phase: LoadPhase,
    data: Option<Arc<KeyRecord>>,
    form: Option<KeySettingsForm>,
}

impl KeyDetailContainer {
    #[must_use]
    pub fn new(ctx: Arc<PageContext>, key: KeyLocator, access: Access) -> Self {
        Self {
            ctx,
            key,
            access,
            phase: LoadPhase::Loading,
            data: None,
            form: None,
        }
    }

    pub fn key(&self) -> &KeyLocator {
        &self.key
    }

    pub fn access(&self) -> &Access {
        &self.access
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Current snapshot, `None` unless ready.
    pub fn data(&self) -> Option<&Arc<KeyRecord>> {
        self.data.as_ref()
    }

    pub fn form(&self) -> Option<&KeySettingsForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut KeySettingsForm> {
        self.form.as_mut()
    }

    pub fn view(&self) -> KeyDetailView<'_> {
        match (self.phase, self.form.as_ref()) {
            (LoadPhase::Ready, Some(form)) => KeyDetailView::Ready(form),
            (LoadPhase::Error, _) => KeyDetailView::Error,
            _ => KeyDetailView::Loading,
        }
    }

    // ===== 加载 =====

    /// Enter `Loading` and return the read to issue. The form is dropped
    /// until the record arrives.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        log::debug!("Fetching key {}", self.key);
        self.phase = LoadPhase::Loading;
        self.form = None;
        FetchRequest {
            key: self.key.clone(),
        }
    }

    pub fn finish_fetch(&mut self, result: ApiResult<KeyRecord>) {
        match result {
            Ok(record) => {
                log::info!("Key {} loaded", self.key);
                self.phase = LoadPhase::Ready;
                self.set_snapshot(Arc::new(record));
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Failed to load key {}: {e}", self.key);
                } else {
                    log::error!("Failed to load key {}: {e}", self.key);
                }
                self.phase = LoadPhase::Error;
                self.data = None;
                self.form = None;
            }
        }
    }

    /// Load the record, as on mount.
    pub async fn fetch(&mut self) {
        let request = self.begin_fetch();
        let api = Arc::clone(&self.ctx.api);
        let result = request.send(api.as_ref()).await;
        self.finish_fetch(result);
    }

    /// Same as [`fetch`](Self::fetch); offered from the error view.
    pub async fn retry(&mut self) {
        self.fetch().await;
    }

    // ===== 表单回调 =====

    /// Merge the server's partial record into a new snapshot.
    ///
    /// No re-fetch; the phase is unchanged.
    pub fn handle_save(&mut self, patch: &KeyPatch) -> CoreResult<()> {
        let current = self.data.as_ref().ok_or(CoreError::NotReady)?;
        let merged = Arc::new(current.merged(patch));
        self.set_snapshot(merged);
        Ok(())
    }

    /// Leave the page for the project's key list. No network call.
    pub fn handle_remove(&self) {
        let location = key_list_location(&self.key.org_id, &self.key.project_id);
        self.ctx.navigator.push(&location);
    }

    /// Forward a save result to the form and merge on success.
    ///
    /// Returns whether the snapshot was updated.
    pub fn finish_save(&mut self, result: ApiResult<KeyPatch>) -> CoreResult<bool> {
        let form = self.form.as_mut().ok_or(CoreError::NotReady)?;
        match form.finish_save(result) {
            Some(patch) => {
                self.handle_save(&patch)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Forward a revoke result to the form and navigate away on success.
    pub fn finish_revoke(&mut self, result: ApiResult<()>) -> CoreResult<bool> {
        let form = self.form.as_mut().ok_or(CoreError::NotReady)?;
        let removed = form.finish_revoke(result);
        if removed {
            self.handle_remove();
        }
        Ok(removed)
    }

    /// Submit the form and merge the response.
    pub async fn submit(&mut self) -> CoreResult<bool> {
        let form = self.form.as_mut().ok_or(CoreError::NotReady)?;
        match form.submit().await {
            Some(patch) => {
                self.handle_save(&patch)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Revoke through the form and navigate away on success.
    pub async fn revoke<F>(&mut self, confirm: F) -> CoreResult<bool>
    where
        F: FnOnce(&str) -> bool,
    {
        let form = self.form.as_mut().ok_or(CoreError::NotReady)?;
        let removed = form.revoke(confirm).await;
        if removed {
            self.handle_remove();
        }
        Ok(removed)
    }

    /// Store a new snapshot and re-seed the form from it.
    fn set_snapshot(&mut self, data: Arc<KeyRecord>) {
        let props = KeySettingsProps::from_record(
            self.access.clone(),
            self.key.org_id.as_str(),
            self.key.project_id.as_str(),
            Arc::clone(&data),
        );
        match self.form.as_mut() {
            Some(form) => form.receive_props(props),
            None => self.form = Some(KeySettingsForm::new(Arc::clone(&self.ctx), props)),
        }
        self.data = Some(data);
    }
}
