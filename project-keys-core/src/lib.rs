//! Project Keys Core Library
//!
//! State machines behind the key settings page:
//! - [`KeyDetailContainer`] loads a key and owns the server snapshot
//! - [`KeySettingsForm`] edits, saves and revokes it
//!
//! Collaborators (API client, notification store, navigation, translation)
//! are injected through [`PageContext`], so the same logic drives any
//! front-end.

pub mod components;
pub mod error;
pub mod texts;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use components::{
    Confirmation, FetchRequest, FieldChange, FormPhase, KeyDetailContainer, KeyDetailView,
    KeySettingsForm, KeySettingsProps, LoadPhase, PageContext, RevokeRequest, SaveRequest,
};
pub use error::{CoreError, CoreResult};
pub use traits::{
    HistoryNavigator, IdentityTranslator, InMemoryIndicatorStore, Indicator, IndicatorHandle,
    IndicatorStore, Navigator, Translator,
};
