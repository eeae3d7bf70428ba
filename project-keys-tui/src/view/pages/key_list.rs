//! Key 列表页视图
//!
//! 列表本身不在本工具范围内，这里只确认吊销结果并给出跳转位置。

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::view::theme::colors;

/// 渲染 Key 列表页
pub fn render(location: &str, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.key_list.revoked),
            Style::default().fg(c.success),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", texts.key_list.location),
                Style::default().fg(c.muted),
            ),
            Span::styled(location.to_string(), Style::default().fg(c.fg)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" {}", texts.common.quit),
                Style::default().fg(c.muted),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
