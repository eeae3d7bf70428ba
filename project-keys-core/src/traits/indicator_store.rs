//! 临时提示（indicator）存储

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Handle returned by [`IndicatorStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndicatorHandle(u64);

impl IndicatorHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Registry of transient "work in progress" notifications.
///
/// `remove` is idempotent: removing an unknown or already removed handle is a
/// no-op.
pub trait IndicatorStore: Send + Sync {
    /// Show a notification, returning the handle that dismisses it.
    fn add(&self, message: &str) -> IndicatorHandle;

    /// Dismiss a notification.
    fn remove(&self, handle: IndicatorHandle);
}

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub handle: IndicatorHandle,
    pub message: String,
}

/// In-memory [`IndicatorStore`], newest notification last.
#[derive(Debug, Default)]
pub struct InMemoryIndicatorStore {
    next_id: AtomicU64,
    items: Mutex<Vec<Indicator>>,
}

impl InMemoryIndicatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification currently shown, oldest first.
    pub fn active(&self) -> Vec<Indicator> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent notification, the one a front-end displays.
    pub fn current(&self) -> Option<Indicator> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl IndicatorStore for InMemoryIndicatorStore {
    fn add(&self, message: &str) -> IndicatorHandle {
        let handle = IndicatorHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        log::debug!("Indicator {} added: {message}", handle.0);
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Indicator {
                handle,
                message: message.to_string(),
            });
        handle
    }

    fn remove(&self, handle: IndicatorHandle) {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        let before = items.len();
        items.retain(|i| i.handle != handle);
        if items.len() != before {
            log::debug!("Indicator {} removed", handle.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_returns_distinct_handles() {
        let store = InMemoryIndicatorStore::new();
        let a = store.add("Saving changes..");
        let b = store.add("Saving changes..");
        assert_ne!(a, b);
        assert_eq!(store.active().len(), 2);
    }

    #[test]
    fn current_is_latest() {
        let store = InMemoryIndicatorStore::new();
        store.add("first");
        store.add("second");
        assert_eq!(store.current().map(|i| i.message), Some("second".to_string()));
    }

    #[test]
    fn remove_is_idempotent() {
        let store = InMemoryIndicatorStore::new();
        let a = store.add("first");
        let b = store.add("second");

        store.remove(a);
        store.remove(a);

        let active = store.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].handle, b);

        store.remove(b);
        store.remove(b);
        assert!(store.is_empty());
    }
}
