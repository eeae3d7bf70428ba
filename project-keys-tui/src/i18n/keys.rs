//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `details.*`, `key_list.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// Key 详情页文本
    pub details: DetailsTexts,
    /// Key 列表页文本
    pub key_list: KeyListTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub retry: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    pub move_focus: &'static str,
    pub edit: &'static str,
    pub toggle: &'static str,
    pub save: &'static str,
    pub revoke: &'static str,
    pub reveal: &'static str,
    pub retry: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

/// Key 详情页
pub struct DetailsTexts {
    pub title: &'static str,
    pub load_failed: &'static str,
    pub save_failed_banner: &'static str,
    // 区块
    pub section_details: &'static str,
    pub section_credentials: &'static str,
    pub section_revoke: &'static str,
    // 字段
    pub name: &'static str,
    pub enabled: &'static str,
    pub created: &'static str,
    pub enabled_help: &'static str,
    pub credentials_help: &'static str,
    pub revoke_help: &'static str,
    // 凭证
    pub dsn: &'static str,
    pub dsn_public: &'static str,
    pub dsn_public_help: &'static str,
    pub csp_endpoint: &'static str,
    pub csp_endpoint_help: &'static str,
    pub public_key: &'static str,
    pub secret_key: &'static str,
    pub project_id: &'static str,
    // 操作
    pub save_changes: &'static str,
    pub revoke_key: &'static str,
    pub removing: &'static str,
}

/// Key 列表页（吊销后跳转到此）
pub struct KeyListTexts {
    pub title: &'static str,
    pub revoked: &'static str,
    pub location: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub confirm_revoke_title: &'static str,
    pub revoke_prompt: &'static str,
    pub help_title: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub saving: &'static str,
    pub saved: &'static str,
    pub revoked: &'static str,
    pub revoke_failed: &'static str,
    pub nothing_to_save: &'static str,
    pub revoke_not_allowed: &'static str,
    pub refresh_busy: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub lines: &'static [(&'static str, &'static str)],
}
