//! Key 详情页视图
//!
//! 三种状态：加载中、加载失败、表单。表单按区块渲染：
//! Details（名称、开关、创建时间、保存按钮）、Credentials、Revoke Key。

use project_keys_api::{log_sanitizer::mask_secret, EditableField};
use project_keys_core::texts::CredentialKind;
use project_keys_core::{KeyDetailView, KeySettingsForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{t, DetailsTexts};
use crate::model::{App, FormFocus};
use crate::view::theme::{colors, Styles};

/// 标签列宽度（显示宽度）
const LABEL_WIDTH: usize = 16;

/// 渲染 Key 详情页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match app.key_details.view() {
        KeyDetailView::Loading => render_loading(frame, area),
        KeyDetailView::Error => render_error(frame, area),
        KeyDetailView::Ready(form) => render_form(app, form, frame, area),
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::styled(format!("  {}", t().common.loading), Styles::help()),
    ]);
    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame, area: Rect) {
    let texts = t();
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::styled(format!("  {}", texts.details.load_failed), Styles::error()),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter / r", Styles::hint_key()),
            Span::styled(format!(" {}", texts.common.retry), Styles::help()),
        ]),
    ]);
    frame.render_widget(paragraph, area);
}

fn render_form(app: &App, form: &KeySettingsForm, frame: &mut Frame, area: Rect) {
    let texts = &t().details;
    let c = colors();
    let mut lines: Vec<Line<'static>> = Vec::new();
    // 焦点控件所在行，用于滚动
    let mut focus_line = 0usize;

    // 保存失败横幅
    if let Some(banner) = form.error_banner() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  ⚠ {banner}"),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ));
    }

    // === Details ===
    push_section(&mut lines, texts.section_details);

    let name_focused = app.focus == FormFocus::Name;
    if name_focused {
        focus_line = lines.len();
    }
    let cursor = if name_focused { "▏" } else { "" };
    lines.push(Line::from(vec![
        label_span(texts.name, name_focused),
        Span::styled(
            format!("[ {}{cursor} ]", form.form_data().name),
            field_style(name_focused),
        ),
    ]));
    if let Some(message) = form.field_error(EditableField::Name) {
        lines.push(error_line(message));
    }

    let enabled_focused = app.focus == FormFocus::Enabled;
    if enabled_focused {
        focus_line = lines.len();
    }
    let checkbox = if form.form_data().is_active { "[x]" } else { "[ ]" };
    lines.push(Line::from(vec![
        label_span(texts.enabled, enabled_focused),
        Span::styled(checkbox, field_style(enabled_focused)),
    ]));
    lines.push(help_line(texts.enabled_help));
    if let Some(message) = form.field_error(EditableField::IsActive) {
        lines.push(error_line(message));
    }

    let created = form
        .date_created()
        .format("%b %-d, %Y %H:%M UTC")
        .to_string();
    lines.push(Line::from(vec![
        label_span(texts.created, false),
        Span::styled(created, Style::default().fg(c.fg)),
    ]));

    lines.push(Line::from(""));
    let save_focused = app.focus == FormFocus::Save;
    if save_focused {
        focus_line = lines.len();
    }
    let save_label = if form.is_saving() {
        format!(" {} ", t().status_bar.saving)
    } else {
        format!(" {} ", texts.save_changes)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(save_label, button_style(save_focused, form.can_save())),
    ]));

    // === Credentials ===
    push_section(&mut lines, texts.section_credentials);
    lines.push(help_line(texts.credentials_help));
    lines.push(Line::from(""));

    for (kind, value) in form.credentials() {
        let focused = app.focus == FormFocus::Credential(kind);
        if focused {
            focus_line = lines.len();
        }
        let shown = if kind.is_secret() && !app.show_secrets {
            mask_secret(value)
        } else {
            value.to_string()
        };
        lines.push(Line::from(vec![
            label_span(credential_label(texts, kind), focused),
            Span::styled(shown, field_style(focused)),
        ]));
        if let Some(help) = credential_help(texts, kind) {
            lines.push(help_line(help));
        }
    }

    // === Revoke Key ===
    if form.can_revoke() {
        push_section(&mut lines, texts.section_revoke);
        lines.push(help_line(texts.revoke_help));
        lines.push(Line::from(""));

        let revoke_focused = app.focus == FormFocus::Revoke;
        if revoke_focused {
            focus_line = lines.len();
        }
        let label = if form.is_removing() {
            format!(" {} ", texts.removing)
        } else {
            format!(" {} ", texts.revoke_key)
        };
        let style = if revoke_focused {
            Style::default().fg(Color::Black).bg(c.error)
        } else {
            Style::default().fg(c.error)
        };
        lines.push(Line::from(vec![Span::raw("  "), Span::styled(label, style)]));
    }

    let scroll = scroll_offset(focus_line, area.height as usize);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// 让焦点行保持在可视区域内（靠下留两行余量）
fn scroll_offset(focus_line: usize, height: usize) -> u16 {
    let visible = height.saturating_sub(2);
    let offset = focus_line.saturating_sub(visible);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &'static str) {
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {title}"),
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD),
    ));
}

fn label_span(label: &str, focused: bool) -> Span<'static> {
    // 使用 unicode-width 计算显示宽度，保证中文标签对齐
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    let marker = if focused { "▶ " } else { "  " };
    let style = if focused {
        Styles::title()
    } else {
        Style::default().fg(colors().muted)
    };
    Span::styled(format!("{marker}{label}{}", " ".repeat(padding)), style)
}

fn field_style(focused: bool) -> Style {
    if focused {
        Styles::selected()
    } else {
        Style::default().fg(colors().fg)
    }
}

fn button_style(focused: bool, enabled: bool) -> Style {
    let c = colors();
    match (focused, enabled) {
        (true, true) => Style::default().fg(Color::Black).bg(c.success),
        (true, false) => Style::default().fg(Color::Black).bg(c.muted),
        (false, true) => Style::default().fg(c.success),
        (false, false) => Style::default().fg(c.muted),
    }
}

fn help_line(text: &str) -> Line<'static> {
    Line::styled(format!("    {text}"), Styles::help())
}

fn error_line(text: &str) -> Line<'static> {
    Line::styled(format!("    {text}"), Styles::error())
}

fn credential_label(texts: &DetailsTexts, kind: CredentialKind) -> &'static str {
    match kind {
        CredentialKind::Dsn => texts.dsn,
        CredentialKind::DsnPublic => texts.dsn_public,
        CredentialKind::CspEndpoint => texts.csp_endpoint,
        CredentialKind::PublicKey => texts.public_key,
        CredentialKind::SecretKey => texts.secret_key,
        CredentialKind::ProjectId => texts.project_id,
    }
}

fn credential_help(texts: &DetailsTexts, kind: CredentialKind) -> Option<&'static str> {
    match kind {
        CredentialKind::DsnPublic => Some(texts.dsn_public_help),
        CredentialKind::CspEndpoint => Some(texts.csp_endpoint_help),
        _ => None,
    }
}
