//! 内容面板（Key 设置表单）更新逻辑

use project_keys_core::{FieldChange, LoadPhase};

use crate::backend::Backend;
use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::{App, FormFocus};

use super::start_fetch;

/// 处理内容面板消息
pub fn update(app: &mut App, backend: &Backend, msg: ContentMessage) {
    if !app.current_page.is_key_details() {
        return;
    }

    match msg {
        ContentMessage::Retry => {
            if app.key_details.phase() == LoadPhase::Error {
                start_fetch(app, backend);
            }
        }
        ContentMessage::ToggleSecrets => {
            app.show_secrets = !app.show_secrets;
        }
        ContentMessage::NextField => {
            app.focus = app.focus.next(app.can_revoke());
        }
        ContentMessage::PrevField => {
            app.focus = app.focus.prev(app.can_revoke());
        }
        ContentMessage::Input(ch) => {
            if app.focus.is_name() {
                edit_name(app, |name| name.push(ch));
            }
        }
        ContentMessage::Backspace => {
            if app.focus.is_name() {
                edit_name(app, |name| {
                    name.pop();
                });
            }
        }
        ContentMessage::Toggle => {
            if app.focus == FormFocus::Enabled {
                toggle_enabled(app);
            }
        }
        ContentMessage::Activate => activate(app, backend),
        ContentMessage::Save => save(app, backend),
        ContentMessage::Revoke => request_revoke(app),
    }
}

/// Enter：执行焦点所在控件
fn activate(app: &mut App, backend: &Backend) {
    match app.focus {
        // 在输入框中按 Enter 等同于提交表单
        FormFocus::Name | FormFocus::Save => save(app, backend),
        FormFocus::Enabled => toggle_enabled(app),
        FormFocus::Credential(kind) => {
            // 选中凭证只是把完整值放到状态栏，不改动表单
            let value = app
                .key_details
                .data()
                .map(|data| kind.value(data).to_string());
            if let Some(value) = value {
                app.set_status(value);
            }
        }
        FormFocus::Revoke => request_revoke(app),
    }
}

fn edit_name(app: &mut App, edit: impl FnOnce(&mut String)) {
    let Some(form) = app.key_details.form_mut() else {
        return;
    };
    let mut name = form.form_data().name.clone();
    edit(&mut name);
    form.on_field_change(FieldChange::Name(name));
}

fn toggle_enabled(app: &mut App) {
    let Some(form) = app.key_details.form_mut() else {
        return;
    };
    let is_active = form.form_data().is_active;
    form.on_field_change(FieldChange::IsActive(!is_active));
}

/// 保存：只有存在改动且不在保存中时才发起请求
fn save(app: &mut App, backend: &Backend) {
    let Some(form) = app.key_details.form_mut() else {
        return;
    };
    if !form.has_changes() {
        app.set_status(t().status_bar.nothing_to_save);
        return;
    }
    if !form.can_save() {
        return;
    }
    if let Some(request) = form.begin_save() {
        backend.save(request);
    }
}

/// 吊销：先弹出确认框
fn request_revoke(app: &mut App) {
    let Some(form) = app.key_details.form() else {
        return;
    };
    if !form.can_revoke() {
        app.set_status(t().status_bar.revoke_not_allowed);
        return;
    }
    if form.is_removing() {
        return;
    }
    let prompt = form.revoke_prompt().into_owned();
    app.modal.show_confirm_revoke(prompt);
}
