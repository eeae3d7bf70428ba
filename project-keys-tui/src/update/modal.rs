//! 弹窗更新逻辑

use project_keys_core::Confirmation;

use crate::backend::Backend;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, backend: &Backend, msg: ModalMessage) {
    let answer = match app.modal.active.as_mut() {
        None => return,
        Some(Modal::Help) => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
            return;
        }
        Some(Modal::ConfirmRevoke { focus, .. }) => match msg {
            ModalMessage::ToggleFocus => {
                *focus = usize::from(*focus == 0);
                return;
            }
            ModalMessage::Close => false,
            ModalMessage::Confirm => *focus == 1,
            ModalMessage::Answer(accepted) => accepted,
        },
    };

    answer_revoke(app, backend, answer);
}

/// 关闭确认框并把回答交给表单
fn answer_revoke(app: &mut App, backend: &Backend, accepted: bool) {
    app.modal.close();
    let Some(form) = app.key_details.form_mut() else {
        return;
    };
    if let Some(request) = form.begin_revoke(Confirmation::from(accepted)) {
        backend.revoke(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::test_support::offline_app;

    #[test]
    fn toggle_focus_flips_between_buttons() {
        let (mut app, backend) = offline_app();
        app.modal.show_confirm_revoke("Revoke?");
        update(&mut app, &backend, ModalMessage::ToggleFocus);
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmRevoke { focus: 1, .. })
        ));
        update(&mut app, &backend, ModalMessage::ToggleFocus);
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmRevoke { focus: 0, .. })
        ));
    }

    #[test]
    fn confirm_on_cancel_button_declines() {
        let (mut app, backend) = offline_app();
        app.modal.show_confirm_revoke("Revoke?");
        update(&mut app, &backend, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert!(app.indicator().is_none());
    }

    #[test]
    fn help_closes_on_escape() {
        let (mut app, backend) = offline_app();
        app.modal.show_help();
        update(&mut app, &backend, ModalMessage::ToggleFocus);
        assert!(app.modal.is_open());
        update(&mut app, &backend, ModalMessage::Close);
        assert!(!app.modal.is_open());
    }
}
