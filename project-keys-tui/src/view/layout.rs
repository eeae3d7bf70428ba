//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(app, frame, title_area);
    render_page_content(app, frame, content_area);
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏：应用名 + 当前 Key
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let location = match &app.current_page {
        Page::KeyDetails { key } => key.to_string(),
        Page::KeyList { location } => location.clone(),
    };
    let title = Paragraph::new(format!(" {}  {}", t().common.app_name, location))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 弹窗打开时页面失去焦点
    let border_style = if app.modal.is_open() {
        Style::default().fg(c.border)
    } else {
        Style::default().fg(c.border_focused)
    };

    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.current_page {
        Page::KeyDetails { .. } => pages::key_details::render(app, frame, inner_area),
        Page::KeyList { location } => pages::key_list::render(location, frame, inner_area),
    }
}
