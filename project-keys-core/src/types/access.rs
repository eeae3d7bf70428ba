//! 权限（capability）集合

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Capability required to revoke a key.
pub const PROJECT_ADMIN: &str = "project:admin";

/// The caller's capabilities for the current project.
///
/// Used to decide what the page offers; the server remains the authority on
/// what is actually allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Access(BTreeSet<String>);

impl Access {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, capability: &str) -> bool {
        self.0.contains(capability)
    }

    pub fn grant(&mut self, capability: impl Into<String>) {
        self.0.insert(capability.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Access {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
