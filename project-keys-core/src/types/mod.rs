//! Core types

mod access;
mod route;

pub use access::{Access, PROJECT_ADMIN};
pub use route::{key_details_location, key_list_location, parse_key_route};

// Re-export wire types used throughout the page
pub use project_keys_api::{
    DsnSet, EditableField, EditableFields, FieldErrors, KeyLocator, KeyPatch, KeyRecord,
};
