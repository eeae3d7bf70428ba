//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "项目密钥",
        loading: "加载中...",
        retry: "重试",
        yes: "是",
        no: "否",
        quit: "退出",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        move_focus: "移动",
        edit: "编辑",
        toggle: "切换",
        save: "保存",
        revoke: "吊销",
        reveal: "显示密钥",
        retry: "重试",
        help: "帮助",
        quit: "退出",
    },

    // ========================================================================
    // Key 详情页
    // ========================================================================
    details: DetailsTexts {
        title: "密钥详情",
        load_failed: "加载数据时出错。",
        save_failed_banner: "无法保存更改，请确认所有字段有效后重试。",
        section_details: "详情",
        section_credentials: "凭证",
        section_revoke: "吊销密钥",
        name: "名称",
        enabled: "启用",
        created: "创建时间",
        enabled_help: "是否接收来自此密钥的事件？可用于临时停用密钥。",
        credentials_help: "凭证由一个公钥和一个私钥组成。不同客户端需要不同的凭证，接入前请先查阅文档。",
        revoke_help: "吊销后凭证将立即被移除并停用，此操作不可撤销。",
        dsn: "DSN",
        dsn_public: "DSN（公开）",
        dsn_public_help: "在 raven-js 等浏览器端 SDK 中使用公开 DSN。",
        csp_endpoint: "CSP 端点",
        csp_endpoint_help: "在 Content-Security-Policy 头的 report-uri 指令中使用 CSP 端点。",
        public_key: "公钥",
        secret_key: "私钥",
        project_id: "项目 ID",
        save_changes: "保存更改",
        revoke_key: "吊销密钥",
        removing: "吊销中...",
    },

    // ========================================================================
    // Key 列表页
    // ========================================================================
    key_list: KeyListTexts {
        title: "客户端密钥",
        revoked: "密钥已吊销。",
        location: "位置",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_revoke_title: "吊销密钥",
        revoke_prompt: "确定要移除此密钥吗？此操作不可撤销。",
        help_title: "帮助",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        saving: "正在保存更改..",
        saved: "更改已保存",
        revoked: "密钥已吊销",
        revoke_failed: "无法吊销密钥",
        nothing_to_save: "没有需要保存的更改",
        revoke_not_allowed: "你没有吊销此密钥的权限",
        refresh_busy: "请等待当前请求完成后再刷新",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        lines: &[
            ("Tab / ↑↓", "在字段间移动"),
            ("输入", "编辑密钥名称"),
            ("Space", "切换启用状态"),
            ("Enter", "执行当前控件"),
            ("Ctrl+s", "保存更改"),
            ("Alt+d", "吊销密钥"),
            ("Alt+s", "显示/隐藏密钥"),
            ("Alt+r", "重新加载"),
            ("Esc", "关闭弹窗"),
            ("Alt+q / Ctrl+c", "退出"),
        ],
    },
};
