//! 表单焦点

use project_keys_core::texts::CredentialKind;

/// Key 详情页上可获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    /// 名称输入框
    #[default]
    Name,
    /// Enabled 开关
    Enabled,
    /// 保存按钮
    Save,
    /// 只读凭证（选中不改变表单）
    Credential(CredentialKind),
    /// 吊销按钮（仅 project:admin 可见）
    Revoke,
}

impl FormFocus {
    /// 按显示顺序排列的所有焦点
    fn order(can_revoke: bool) -> Vec<FormFocus> {
        let mut order = vec![FormFocus::Name, FormFocus::Enabled, FormFocus::Save];
        order.extend(CredentialKind::ALL.iter().copied().map(FormFocus::Credential));
        if can_revoke {
            order.push(FormFocus::Revoke);
        }
        order
    }

    fn position(self, order: &[FormFocus]) -> usize {
        order.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// 下一个控件（循环）
    #[must_use]
    pub fn next(self, can_revoke: bool) -> Self {
        let order = Self::order(can_revoke);
        let i = self.position(&order);
        order[(i + 1) % order.len()]
    }

    /// 上一个控件（循环）
    #[must_use]
    pub fn prev(self, can_revoke: bool) -> Self {
        let order = Self::order(can_revoke);
        let i = self.position(&order);
        order[(i + order.len() - 1) % order.len()]
    }

    /// 是否在名称输入框
    pub fn is_name(self) -> bool {
        matches!(self, FormFocus::Name)
    }
}
