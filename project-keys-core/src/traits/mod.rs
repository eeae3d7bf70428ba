//! 存储与协作方抽象 Traits

mod indicator_store;
mod navigator;
mod translator;

pub use indicator_store::{Indicator, IndicatorHandle, IndicatorStore, InMemoryIndicatorStore};
pub use navigator::{HistoryNavigator, Navigator};
pub use translator::{IdentityTranslator, Translator};

// Re-export the API trait so callers only need the core crate
pub use project_keys_api::KeyApi;
