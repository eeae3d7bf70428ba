//! 国际化（i18n）
//!
//! 翻译表为编译期常量结构体，通过全局原子变量切换当前语言。
//! [`TuiTranslator`] 把核心库的提示文案映射到当前语言。

use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};

use project_keys_core::texts;
use project_keys_core::Translator;

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    translations(current_language())
}

/// 获取指定语言的翻译
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::EnUs => &en_us::TRANSLATIONS,
        Language::ZhCn => &zh_cn::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::ZhCn,
        _ => Language::EnUs,
    }
}

/// 核心库文案翻译器
///
/// 未登记的文案原样返回。
#[derive(Debug, Default, Clone, Copy)]
pub struct TuiTranslator;

impl Translator for TuiTranslator {
    fn translate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(translate_in(current_language(), text))
    }
}

fn translate_in(lang: Language, text: &str) -> &str {
    let tr = translations(lang);
    match text {
        texts::SAVING_CHANGES => tr.status_bar.saving,
        texts::REVOKE_CONFIRMATION => tr.modal.revoke_prompt,
        texts::SAVE_FAILED_BANNER => tr.details.save_failed_banner,
        other => other,
    }
}
