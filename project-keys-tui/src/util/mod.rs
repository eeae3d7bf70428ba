//! 终端与日志
//!
//! `init_terminal` 进入原始模式和备用屏幕，并安装 panic hook 在崩溃时还原终端；
//! 正常退出时 main 在主循环结束后调用 `restore_terminal`。
//! 日志写入配置目录下的文件，见 `logging`。

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
