//! Key 设置表单

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use project_keys_api::{
    ApiError, EditableField, EditableFields, FieldErrors, KeyApi, KeyLocator, KeyPatch, KeyRecord,
    Result as ApiResult,
};
use serde::{Deserialize, Serialize};

use crate::components::PageContext;
use crate::texts::{CredentialKind, REVOKE_CONFIRMATION, SAVE_FAILED_BANNER, SAVING_CHANGES};
use crate::traits::IndicatorHandle;
use crate::types::{Access, PROJECT_ADMIN};

/// Inputs handed down by [`KeyDetailContainer`](crate::KeyDetailContainer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySettingsProps {
    pub access: Access,
    pub org_id: String,
    pub project_id: String,
    /// Server snapshot, never mutated by the form.
    pub data: Arc<KeyRecord>,
    /// Seed of the editable copy.
    pub initial_data: EditableFields,
}

impl KeySettingsProps {
    /// Props for `data`, seeded from its own editable fields.
    pub fn from_record(
        access: Access,
        org_id: impl Into<String>,
        project_id: impl Into<String>,
        data: Arc<KeyRecord>,
    ) -> Self {
        let initial_data = data.editable_fields();
        Self {
            access,
            org_id: org_id.into(),
            project_id: project_id.into(),
            data,
            initial_data,
        }
    }
}

/// 表单阶段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    #[default]
    Ready,
    Saving,
    Error,
}

/// A single edit of the mutable copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    IsActive(bool),
}

impl FieldChange {
    pub fn field(&self) -> EditableField {
        match self {
            Self::Name(_) => EditableField::Name,
            Self::IsActive(_) => EditableField::IsActive,
        }
    }
}

/// Answer to the revoke confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(accepted: bool) -> Self {
        if accepted {
            Self::Accepted
        } else {
            Self::Declined
        }
    }
}

/// PUT issued by [`KeySettingsForm::begin_save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub key: KeyLocator,
    pub fields: EditableFields,
}

impl SaveRequest {
    pub async fn send(&self, api: &dyn KeyApi) -> ApiResult<KeyPatch> {
        api.update_key(&self.key, &self.fields).await
    }
}

/// DELETE issued by [`KeySettingsForm::begin_revoke`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeRequest {
    pub key: KeyLocator,
}

impl RevokeRequest {
    pub async fn send(&self, api: &dyn KeyApi) -> ApiResult<()> {
        api.delete_key(&self.key).await
    }
}

/// Local edit state of the key settings page.
///
/// Saving and revoking are guarded independently, so each has at most one
/// request outstanding.
pub struct KeySettingsForm {
    ctx: Arc<PageContext>,
    props: KeySettingsProps,
    form_data: EditableFields,
    errors: FieldErrors,
    phase: FormPhase,
    save_indicator: Option<IndicatorHandle>,
    /// Indicator of the in-flight DELETE, `Some` while removing.
    remove_indicator: Option<IndicatorHandle>,
    remove_failed: bool,
}

impl KeySettingsForm {
    #[must_use]
    pub fn new(ctx: Arc<PageContext>, props: KeySettingsProps) -> Self {
        let form_data = props.initial_data.clone();
        Self {
            ctx,
            props,
            form_data,
            errors: FieldErrors::new(),
            phase: FormPhase::Ready,
            save_indicator: None,
            remove_indicator: None,
            remove_failed: false,
        }
    }

    pub fn props(&self) -> &KeySettingsProps {
        &self.props
    }

    pub fn form_data(&self) -> &EditableFields {
        &self.form_data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn key(&self) -> KeyLocator {
        KeyLocator::new(
            self.props.org_id.as_str(),
            self.props.project_id.as_str(),
            self.props.data.id.as_str(),
        )
    }

    // ===== 编辑 =====

    /// Update one field of the mutable copy. Phase and errors are untouched.
    pub fn on_field_change(&mut self, change: FieldChange) {
        match change {
            FieldChange::Name(name) => self.form_data.name = name,
            FieldChange::IsActive(is_active) => self.form_data.is_active = is_active,
        }
    }

    /// Replace the props, keeping the mutable copy and all local state.
    pub fn receive_props(&mut self, props: KeySettingsProps) {
        self.props = props;
    }

    pub fn has_changes(&self) -> bool {
        self.form_data != self.props.initial_data
    }

    pub fn is_saving(&self) -> bool {
        self.phase == FormPhase::Saving
    }

    /// Whether the save control is enabled.
    pub fn can_save(&self) -> bool {
        self.has_changes() && !self.is_saving()
    }

    // ===== 保存 =====

    /// Start a save of the whole mutable copy.
    ///
    /// Returns `None` while another save is in flight.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        if self.is_saving() {
            log::debug!("Save of key {} ignored: already saving", self.props.data.id);
            return None;
        }

        self.phase = FormPhase::Saving;
        self.save_indicator = Some(self.ctx.indicators.add(&self.ctx.text(SAVING_CHANGES)));

        Some(SaveRequest {
            key: self.key(),
            fields: self.form_data.clone(),
        })
    }

    /// Apply the outcome of a save.
    ///
    /// Returns the partial record the parent merges into its snapshot, or
    /// `None` on failure.
    pub fn finish_save(&mut self, result: ApiResult<KeyPatch>) -> Option<KeyPatch> {
        if !self.is_saving() {
            log::warn!(
                "Save result for key {} dropped: no save in flight",
                self.props.data.id
            );
            return None;
        }

        if let Some(handle) = self.save_indicator.take() {
            self.ctx.indicators.remove(handle);
        }

        match result {
            Ok(patch) => {
                log::info!("Key {} saved", self.props.data.id);
                self.errors = FieldErrors::new();
                self.phase = FormPhase::Ready;
                Some(patch)
            }
            Err(e) => {
                log_failure("save", &self.props.data.id, &e);
                self.errors = e.field_errors();
                self.phase = FormPhase::Error;
                None
            }
        }
    }

    /// `begin_save`, PUT, then `finish_save`.
    pub async fn submit(&mut self) -> Option<KeyPatch> {
        let request = self.begin_save()?;
        let api = Arc::clone(&self.ctx.api);
        let result = request.send(api.as_ref()).await;
        self.finish_save(result)
    }

    // ===== 吊销 =====

    /// Revoke is only offered to `project:admin`.
    pub fn can_revoke(&self) -> bool {
        self.props.access.has(PROJECT_ADMIN)
    }

    pub fn revoke_prompt(&self) -> Cow<'static, str> {
        self.ctx.text(REVOKE_CONFIRMATION)
    }

    pub fn is_removing(&self) -> bool {
        self.remove_indicator.is_some()
    }

    /// Set when the last DELETE failed. Never shown as a page banner.
    pub fn remove_failed(&self) -> bool {
        self.remove_failed
    }

    /// Start a revoke once the user has answered the prompt.
    ///
    /// Returns `None` when declined, when a revoke is already in flight, or
    /// without `project:admin`.
    pub fn begin_revoke(&mut self, confirmation: Confirmation) -> Option<RevokeRequest> {
        if self.is_removing() {
            return None;
        }
        if !self.can_revoke() {
            log::warn!(
                "Revoke of key {} refused: missing {PROJECT_ADMIN}",
                self.props.data.id
            );
            return None;
        }
        if confirmation == Confirmation::Declined {
            return None;
        }

        self.remove_indicator = Some(self.ctx.indicators.add(&self.ctx.text(SAVING_CHANGES)));
        Some(RevokeRequest { key: self.key() })
    }

    /// Apply the outcome of a revoke. `true` means the parent should treat
    /// the key as removed.
    pub fn finish_revoke(&mut self, result: ApiResult<()>) -> bool {
        let Some(handle) = self.remove_indicator.take() else {
            log::warn!(
                "Revoke result for key {} dropped: no revoke in flight",
                self.props.data.id
            );
            return false;
        };
        self.ctx.indicators.remove(handle);

        match result {
            Ok(()) => {
                log::info!("Key {} revoked", self.props.data.id);
                true
            }
            Err(e) => {
                log_failure("revoke", &self.props.data.id, &e);
                self.remove_failed = true;
                false
            }
        }
    }

    /// Ask `confirm` with the revoke prompt, then DELETE on acceptance.
    pub async fn revoke<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        if self.is_removing() || !self.can_revoke() {
            return false;
        }
        let answer = Confirmation::from(confirm(&self.revoke_prompt()));
        let Some(request) = self.begin_revoke(answer) else {
            return false;
        };
        let api = Arc::clone(&self.ctx.api);
        let result = request.send(api.as_ref()).await;
        self.finish_revoke(result)
    }

    // ===== 展示 =====

    /// Banner shown above the form after a failed save.
    pub fn error_banner(&self) -> Option<Cow<'static, str>> {
        (self.phase == FormPhase::Error).then(|| self.ctx.text(SAVE_FAILED_BANNER))
    }

    pub fn field_error(&self, field: EditableField) -> Option<&str> {
        self.errors.get(field.as_str())
    }

    pub fn date_created(&self) -> DateTime<Utc> {
        self.props.data.date_created
    }

    /// Read-only credential strings, in display order.
    pub fn credentials(&self) -> Vec<(CredentialKind, &str)> {
        CredentialKind::ALL
            .iter()
            .map(|kind| (*kind, kind.value(&self.props.data)))
            .collect()
    }
}

// 表单被丢弃时（例如重新加载）收回仍在显示的提示
impl Drop for KeySettingsForm {
    fn drop(&mut self) {
        for handle in [self.save_indicator.take(), self.remove_indicator.take()]
            .into_iter()
            .flatten()
        {
            self.ctx.indicators.remove(handle);
        }
    }
}

fn log_failure(action: &str, key_id: &str, e: &ApiError) {
    if e.is_expected() {
        log::warn!("Failed to {action} key {key_id}: {e}");
    } else {
        log::error!("Failed to {action} key {key_id}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        admin_access, sample_record, test_context, ApiCall, MockKeyApi, TestContext,
    };

    fn form_with(api: MockKeyApi, access: Access) -> (KeySettingsForm, TestContext) {
        let t = test_context(api);
        let props =
            KeySettingsProps::from_record(access, "acme", "web", Arc::new(sample_record()));
        (KeySettingsForm::new(Arc::clone(&t.ctx), props), t)
    }

    fn form(api: MockKeyApi) -> (KeySettingsForm, TestContext) {
        form_with(api, admin_access())
    }

    fn validation_error(body: &str) -> ApiError {
        ApiError::Http {
            status: 400,
            body: Some(body.to_string()),
        }
    }

    // ===== 编辑 =====

    #[test]
    fn seeded_form_has_no_changes() {
        let (form, _t) = form(MockKeyApi::new());
        assert!(!form.has_changes());
        assert!(!form.can_save());
        assert_eq!(form.phase(), FormPhase::Ready);
    }

    #[test]
    fn editing_back_clears_changes() {
        let (mut form, _t) = form(MockKeyApi::new());
        let original = form.form_data().name.clone();

        form.on_field_change(FieldChange::Name("Renamed".to_string()));
        assert!(form.has_changes());
        assert!(form.can_save());

        form.on_field_change(FieldChange::Name(original));
        assert!(!form.has_changes());

        form.on_field_change(FieldChange::IsActive(false));
        assert!(form.has_changes());
        form.on_field_change(FieldChange::IsActive(true));
        assert!(!form.has_changes());
    }

    #[test]
    fn editing_leaves_phase_and_errors() {
        let (mut form, t) = form(MockKeyApi::new());
        form.begin_save();
        form.finish_save(Err(validation_error(r#"{"name": "bad"}"#)));
        assert_eq!(form.phase(), FormPhase::Error);

        form.on_field_change(FieldChange::Name("x".to_string()));
        assert_eq!(form.phase(), FormPhase::Error);
        assert_eq!(form.field_error(EditableField::Name), Some("bad"));
        assert!(t.indicators.is_empty());
    }

    #[test]
    fn receive_props_keeps_mutable_copy() {
        let (mut form, _t) = form(MockKeyApi::new());
        form.on_field_change(FieldChange::Name("Draft".to_string()));

        let mut record = sample_record();
        record.name = "Server".to_string();
        let props = KeySettingsProps::from_record(admin_access(), "acme", "web", Arc::new(record));
        form.receive_props(props);

        assert_eq!(form.form_data().name, "Draft");
        assert_eq!(form.props().initial_data.name, "Server");
        assert!(form.has_changes());
    }

    // ===== 保存 =====

    #[test]
    fn begin_save_enters_saving_with_indicator() {
        let (mut form, t) = form(MockKeyApi::new());
        form.on_field_change(FieldChange::IsActive(false));

        let request = form.begin_save().expect("save should start");
        assert_eq!(request.key, KeyLocator::new("acme", "web", "k1"));
        assert!(!request.fields.is_active);
        assert_eq!(form.phase(), FormPhase::Saving);
        assert!(!form.can_save());

        let current = t.indicators.current().expect("indicator");
        assert_eq!(current.message, SAVING_CHANGES);
    }

    #[test]
    fn begin_save_while_saving_is_ignored() {
        let (mut form, t) = form(MockKeyApi::new());
        assert!(form.begin_save().is_some());
        assert!(form.begin_save().is_none());
        assert_eq!(t.indicators.active().len(), 1);
    }

    #[tokio::test]
    async fn submit_success_returns_patch() {
        let patch = KeyPatch {
            name: Some("new".to_string()),
            is_active: Some(true),
            ..KeyPatch::default()
        };
        let api = MockKeyApi::new().with_update(Ok(patch.clone()));
        let (mut form, t) = form(api);
        form.on_field_change(FieldChange::Name("new".to_string()));

        let saved = form.submit().await;

        assert_eq!(saved, Some(patch));
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), FormPhase::Ready);
        assert!(form.error_banner().is_none());
        assert!(t.indicators.is_empty());

        let calls = t.api.calls().await;
        assert_eq!(
            calls,
            vec![ApiCall::Update(
                KeyLocator::new("acme", "web", "k1"),
                EditableFields {
                    name: "new".to_string(),
                    is_active: true,
                }
            )]
        );
    }

    #[tokio::test]
    async fn submit_failure_exposes_field_errors() {
        let api = MockKeyApi::new().with_update(Err(validation_error(r#"{"name":["too long"]}"#)));
        let (mut form, t) = form(api);
        form.on_field_change(FieldChange::Name("x".repeat(300)));
        let before = form.form_data().clone();

        assert!(form.submit().await.is_none());

        assert_eq!(form.phase(), FormPhase::Error);
        assert_eq!(form.field_error(EditableField::Name), Some("too long"));
        assert_eq!(form.field_error(EditableField::IsActive), None);
        assert_eq!(form.form_data(), &before);
        assert_eq!(form.error_banner().as_deref(), Some(SAVE_FAILED_BANNER));
        assert!(t.indicators.is_empty());
    }

    #[tokio::test]
    async fn network_failure_leaves_empty_error_map() {
        let api = MockKeyApi::new().with_update(Err(ApiError::NetworkError {
            detail: "connection refused".to_string(),
        }));
        let (mut form, _t) = form(api);

        assert!(form.submit().await.is_none());
        assert_eq!(form.phase(), FormPhase::Error);
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn successful_save_clears_previous_errors() {
        let api = MockKeyApi::new().with_update(Err(validation_error(r#"{"name":"bad"}"#)));
        let (mut form, t) = form(api);
        form.submit().await;
        assert!(!form.errors().is_empty());

        t.api.set_update(Ok(KeyPatch::default())).await;
        form.submit().await;
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), FormPhase::Ready);
    }

    #[test]
    fn finish_save_without_save_is_dropped() {
        let (mut form, _t) = form(MockKeyApi::new());
        assert!(form.finish_save(Ok(KeyPatch::default())).is_none());
        assert_eq!(form.phase(), FormPhase::Ready);
    }

    // ===== 吊销 =====

    #[tokio::test]
    async fn declined_revoke_sends_nothing() {
        let (mut form, t) = form(MockKeyApi::new());
        let mut asked = None;

        let removed = form
            .revoke(|prompt| {
                asked = Some(prompt.to_string());
                false
            })
            .await;

        assert!(!removed);
        assert_eq!(asked.as_deref(), Some(REVOKE_CONFIRMATION));
        assert!(t.api.calls().await.is_empty());
        assert!(t.indicators.is_empty());
    }

    #[tokio::test]
    async fn accepted_revoke_deletes_once() {
        let (mut form, t) = form(MockKeyApi::new());

        assert!(form.revoke(|_| true).await);

        assert_eq!(
            t.api.calls().await,
            vec![ApiCall::Delete(KeyLocator::new("acme", "web", "k1"))]
        );
        assert!(!form.is_removing());
        assert!(!form.remove_failed());
        assert!(t.indicators.is_empty());
    }

    #[test]
    fn revoke_in_flight_is_guarded() {
        let (mut form, t) = form(MockKeyApi::new());
        assert!(form.begin_revoke(Confirmation::Accepted).is_some());
        assert!(form.is_removing());
        assert!(form.begin_revoke(Confirmation::Accepted).is_none());
        assert_eq!(t.indicators.active().len(), 1);
    }

    #[test]
    fn save_and_revoke_are_guarded_independently() {
        let (mut form, t) = form(MockKeyApi::new());
        assert!(form.begin_save().is_some());
        assert!(form.begin_revoke(Confirmation::Accepted).is_some());
        assert_eq!(t.indicators.active().len(), 2);
    }

    #[tokio::test]
    async fn revoke_failure_sets_internal_flag_only() {
        let api = MockKeyApi::new().with_delete(Err(ApiError::Http {
            status: 500,
            body: None,
        }));
        let (mut form, t) = form(api);

        assert!(!form.revoke(|_| true).await);

        assert!(form.remove_failed());
        assert!(!form.is_removing());
        assert_eq!(form.phase(), FormPhase::Ready);
        assert!(form.error_banner().is_none());
        assert!(t.indicators.is_empty());
    }

    #[test]
    fn revoke_requires_project_admin() {
        let access: Access = ["project:read", "project:write"].into_iter().collect();
        let (mut form, t) = form_with(MockKeyApi::new(), access);

        assert!(!form.can_revoke());
        assert!(form.begin_revoke(Confirmation::Accepted).is_none());
        assert!(t.indicators.is_empty());
    }

    #[test]
    fn finish_revoke_without_revoke_is_dropped() {
        let (mut form, _t) = form(MockKeyApi::new());
        assert!(!form.finish_revoke(Ok(())));
    }

    #[test]
    fn dropping_form_releases_indicators() {
        let (mut form, t) = form(MockKeyApi::new());
        form.begin_save();
        form.begin_revoke(Confirmation::Accepted);
        assert_eq!(t.indicators.active().len(), 2);

        drop(form);
        assert!(t.indicators.is_empty());
    }

    // ===== 展示 =====

    #[test]
    fn credentials_mutate_nothing() {
        let (form, _t) = form(MockKeyApi::new());
        let before = form.form_data().clone();

        let credentials = form.credentials();

        assert_eq!(credentials.len(), CredentialKind::ALL.len());
        assert_eq!(credentials[0], (CredentialKind::Dsn, form.props().data.dsn.secret.as_str()));
        assert_eq!(form.form_data(), &before);
        assert!(!form.has_changes());
    }
}
