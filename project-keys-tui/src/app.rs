//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，main.rs 已经发起了首次加载：
//!
//! App {
//!
//!     should_quit: false,                             // 决定应用是否应该退出
//!     current_page: Page::KeyDetails { key },         // 当前页面
//!     focus: FormFocus::Name,                         // 表单焦点
//!     key_details: KeyDetailContainer (Loading),      // 等待 GET 结果
//!     modal / status_message: 空
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Some(msg) = backend.try_recv() {      // 取出已完成的网络请求结果
//!         update::update(&mut app , msg)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台请求结果
        while let Some(msg) = backend.try_recv() {
            update::update(app, backend, AppMessage::Backend(msg));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, backend, msg);
        }
    }

    Ok(())
}
