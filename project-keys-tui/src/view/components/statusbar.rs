//! 底部状态栏组件

use project_keys_core::LoadPhase;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FormFocus, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前页面和焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 进行中的提示（保存中）优先于普通状态消息
    let message = match app.indicator() {
        Some(indicator) => Some((indicator.message, colors().warning)),
        None => app.status_message.clone().map(|msg| (msg, Color::Yellow)),
    };
    if let Some((msg, color)) = message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints_text = &t().hints;
    let mut hints = Vec::new();

    match &app.current_page {
        Page::KeyList { .. } => {
            hints.push(("q", hints_text.quit));
            return hints;
        }
        Page::KeyDetails { .. } => match app.key_details.phase() {
            LoadPhase::Loading => {}
            LoadPhase::Error => hints.push(("Enter", hints_text.retry)),
            LoadPhase::Ready => {
                hints.push(("Tab", hints_text.move_focus));
                match app.focus {
                    FormFocus::Name => hints.push(("abc", hints_text.edit)),
                    FormFocus::Enabled => hints.push(("Space", hints_text.toggle)),
                    _ => {}
                }
                hints.push(("Ctrl+s", hints_text.save));
                if app.can_revoke() {
                    hints.push(("Alt+d", hints_text.revoke));
                }
                hints.push(("Alt+s", hints_text.reveal));
            }
        },
    }

    hints.push(("Alt+h", hints_text.help));
    hints.push(("Alt+q", hints_text.quit));

    hints
}
