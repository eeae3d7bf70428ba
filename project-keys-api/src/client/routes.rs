//! Endpoint paths, relative to the API root.

use urlencoding::encode;

use crate::types::{KeyLocator, SaveRoute};

/// `/projects/{org}/{project}/keys/{key}/` — used by GET and DELETE.
pub fn key_path(key: &KeyLocator) -> String {
    format!(
        "/projects/{}/{}/keys/{}/",
        encode(&key.org_id),
        encode(&key.project_id),
        encode(&key.key_id)
    )
}

/// Path of the update request for the given route choice.
pub fn update_path(key: &KeyLocator, route: SaveRoute) -> String {
    match route {
        SaveRoute::Project => format!(
            "/projects/{}/{}/",
            encode(&key.org_id),
            encode(&key.project_id)
        ),
        SaveRoute::Key => key_path(key),
    }
}
