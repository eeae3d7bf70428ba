//! 页面跳转抽象

use std::sync::{Mutex, PoisonError};

/// Moves the user to another dashboard location.
pub trait Navigator: Send + Sync {
    fn push(&self, location: &str);
}

/// [`Navigator`] that keeps the visited locations in memory.
///
/// Front-ends without a router read [`current`](Self::current) after each
/// update to decide what to show.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for HistoryNavigator {
    fn push(&self, location: &str) {
        log::info!("Navigating to {location}");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_pushes_in_order() {
        let nav = HistoryNavigator::new();
        assert!(nav.current().is_none());

        nav.push("/acme/web/settings/keys/k1/");
        nav.push("/acme/web/settings/keys/");

        assert_eq!(nav.current().as_deref(), Some("/acme/web/settings/keys/"));
        assert_eq!(nav.history().len(), 2);
    }
}
