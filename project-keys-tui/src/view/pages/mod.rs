//! 页面视图

pub mod key_details;
pub mod key_list;
