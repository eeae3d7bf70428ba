//! Dashboard routes of the key settings screens.

use project_keys_api::KeyLocator;

use crate::error::{CoreError, CoreResult};

/// Parse `/{org}/{project}/settings/keys/{key}/` (slashes optional at both
/// ends) into a locator.
pub fn parse_key_route(path: &str) -> CoreResult<KeyLocator> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [org, project, "settings", "keys", key] => Ok(KeyLocator::new(*org, *project, *key)),
        _ => Err(CoreError::InvalidRoute(path.to_string())),
    }
}

/// Route of the key details screen.
pub fn key_details_location(key: &KeyLocator) -> String {
    format!(
        "/{}/{}/settings/keys/{}/",
        key.org_id, key.project_id, key.key_id
    )
}

/// Route of the project's key list, where a revoked key's page leads.
pub fn key_list_location(org_id: &str, project_id: &str) -> String {
    format!("/{org_id}/{project_id}/settings/keys/")
}
