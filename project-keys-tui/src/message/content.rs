//! 内容面板消息类型

/// Key 详情页上的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    /// 焦点移到下一个控件
    NextField,

    /// 焦点移到上一个控件
    PrevField,

    /// 在名称输入框中输入字符
    Input(char),

    /// 删除名称最后一个字符
    Backspace,

    /// 切换 Enabled
    Toggle,

    /// 执行焦点所在控件（Enter）
    Activate,

    /// 保存更改
    Save,

    /// 请求吊销（弹出确认框）
    Revoke,

    /// 加载失败后重试
    Retry,

    /// 切换私密凭证的显示
    ToggleSecrets,
}
