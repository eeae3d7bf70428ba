//! 异步请求结果处理

use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::{App, Page};

/// 处理 Backend 返回的请求结果
pub fn update(app: &mut App, msg: BackendMessage) {
    // 页面已切换（例如吊销后跳转）时丢弃迟到的结果
    if !app.current_page.shows(msg.key()) {
        log::debug!("Dropping stale result for key {}", msg.key());
        return;
    }

    match msg {
        BackendMessage::Fetched { result, .. } => {
            app.key_details.finish_fetch(result);
        }

        BackendMessage::Saved { result, .. } => match app.key_details.finish_save(result) {
            Ok(true) => app.set_status(t().status_bar.saved),
            // 失败时表单自己显示横幅与字段错误
            Ok(false) => {}
            Err(e) => log::warn!("Save result ignored: {e}"),
        },

        BackendMessage::Revoked { result, .. } => match app.key_details.finish_revoke(result) {
            Ok(true) => {
                if let Some(location) = app.navigator.current() {
                    app.current_page = Page::KeyList { location };
                }
                app.modal.close();
                app.set_status(t().status_bar.revoked);
            }
            Ok(false) => {
                if app.key_details.form().is_some_and(|f| f.remove_failed()) {
                    app.set_status(t().status_bar.revoke_failed);
                }
            }
            Err(e) => log::warn!("Revoke result ignored: {e}"),
        },
    }
}
