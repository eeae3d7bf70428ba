//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use project_keys_core::LoadPhase;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, Modal, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    match app.current_page {
        Page::KeyList { .. } => handle_key_list_keys(key),
        Page::KeyDetails { .. } => match app.key_details.phase() {
            LoadPhase::Loading => AppMessage::Noop,
            LoadPhase::Error => handle_error_keys(key),
            LoadPhase::Ready => handle_form_keys(key, app),
        },
    }
}

/// 处理弹窗的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    let msg = match (modal, key.code) {
        (_, KeyCode::Esc) => ModalMessage::Close,
        (Modal::Help, KeyCode::Enter | KeyCode::Char('q' | '?')) => ModalMessage::Close,
        (Modal::ConfirmRevoke { .. }, KeyCode::Tab | KeyCode::Left | KeyCode::Right) => {
            ModalMessage::ToggleFocus
        }
        (Modal::ConfirmRevoke { .. }, KeyCode::Enter) => ModalMessage::Confirm,
        (Modal::ConfirmRevoke { .. }, KeyCode::Char('y' | 'Y')) => ModalMessage::Answer(true),
        (Modal::ConfirmRevoke { .. }, KeyCode::Char('n' | 'N')) => ModalMessage::Answer(false),
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

/// 吊销后的 Key 列表页，只能退出
fn handle_key_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => AppMessage::Quit,
        _ => AppMessage::Noop,
    }
}

/// 加载失败：Enter 或 r 重试
fn handle_error_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => AppMessage::Content(ContentMessage::Retry),
        _ => AppMessage::Noop,
    }
}

/// 处理表单的按键
fn handle_form_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::SAVE.matches(&key) {
        return AppMessage::Content(ContentMessage::Save);
    }
    if DefaultKeymap::REVOKE.matches(&key) {
        return AppMessage::Content(ContentMessage::Revoke);
    }
    if DefaultKeymap::REVEAL.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSecrets);
    }

    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => ContentMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => ContentMessage::PrevField,
        KeyCode::Enter => ContentMessage::Activate,
        KeyCode::Backspace if app.focus.is_name() => ContentMessage::Backspace,
        KeyCode::Char(c)
            if app.focus.is_name()
                && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT) =>
        {
            ContentMessage::Input(c)
        }
        KeyCode::Char(' ') => ContentMessage::Toggle,
        KeyCode::Char('?') => return AppMessage::ShowHelp,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}
