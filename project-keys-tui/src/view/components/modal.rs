//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, Modal};

/// 弹窗最大宽度
const MAX_WIDTH: u16 = 60;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmRevoke { prompt, focus } => render_confirm_revoke(frame, prompt, *focus),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 按显示宽度折行后需要的行数
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let lines = text.width().div_ceil(width).max(1);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// 渲染吊销确认弹窗
fn render_confirm_revoke(frame: &mut Frame, prompt: &str, focus: usize) {
    let texts = t();

    let inner_width = MAX_WIDTH - 4;
    // 边框(2) + 空行(1) + 问题 + 空行(1) + 按钮(1)
    let height = 2 + 1 + wrapped_height(prompt, inner_width) + 1 + 1;
    let area = centered_rect(MAX_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.confirm_revoke_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(prompt.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} (n) ", texts.common.no), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} (y) ", texts.common.yes), confirm_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let entries = texts.help.lines;

    let key_width = entries.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let height = u16::try_from(entries.len()).unwrap_or(u16::MAX).saturating_add(4);
    let area = centered_rect(MAX_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.help_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for (key, desc) in entries {
        let padding = key_width.saturating_sub(key.width());
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key}{}  ", " ".repeat(padding)),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}
