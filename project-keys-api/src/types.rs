//! Wire types for the project key endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============ Key record ============

/// The connection strings derived from a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsnSet {
    /// DSN embedding both the public and the secret key.
    pub secret: String,
    /// DSN with only the public key, for browser SDKs.
    pub public: String,
    /// Endpoint for `Content-Security-Policy` `report-uri`.
    pub csp: String,
}

/// A project key as returned by `GET /projects/{org}/{project}/keys/{key}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    pub is_active: bool,
    #[serde(with = "crate::utils::datetime")]
    pub date_created: DateTime<Utc>,
    pub public: String,
    pub secret: String,
    #[serde(deserialize_with = "string_or_number")]
    pub project_id: String,
    pub dsn: DsnSet,
}

impl KeyRecord {
    /// The subset of fields a settings form is allowed to edit.
    #[must_use]
    pub fn editable_fields(&self) -> EditableFields {
        EditableFields {
            name: self.name.clone(),
            is_active: self.is_active,
        }
    }

    /// Build a new record from `self` with every field present in `patch`
    /// replacing the current value. `self` is left untouched.
    #[must_use]
    pub fn merged(&self, patch: &KeyPatch) -> Self {
        Self {
            id: patch.id.clone().unwrap_or_else(|| self.id.clone()),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            is_active: patch.is_active.unwrap_or(self.is_active),
            date_created: patch.date_created.unwrap_or(self.date_created),
            public: patch.public.clone().unwrap_or_else(|| self.public.clone()),
            secret: patch.secret.clone().unwrap_or_else(|| self.secret.clone()),
            project_id: patch
                .project_id
                .clone()
                .unwrap_or_else(|| self.project_id.clone()),
            dsn: patch.dsn.clone().unwrap_or_else(|| self.dsn.clone()),
        }
    }
}

/// A partial key record, as returned by the update endpoint.
///
/// Absent (or `null`) fields mean "unchanged". `dsn` is replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyPatch {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_string_or_number"
    )]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::datetime::option"
    )]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_string_or_number"
    )]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsn: Option<DsnSet>,
}

// ============ Editable fields ============

/// Request body of the update endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableFields {
    pub name: String,
    pub is_active: bool,
}

/// Names of the editable fields, matching their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    Name,
    IsActive,
}

impl EditableField {
    pub fn all() -> &'static [EditableField] {
        &[EditableField::Name, EditableField::IsActive]
    }

    /// Wire name, also the key used in field error payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            EditableField::Name => "name",
            EditableField::IsActive => "isActive",
        }
    }
}

// ============ Field errors ============

/// Field name → validation message, as reported by a failed update.
///
/// The server sends either a string or a list of strings per field; lists are
/// joined with a single space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw response body. Anything that is not a JSON object yields
    /// an empty map.
    pub fn from_response_body(body: &str) -> Self {
        serde_json::from_str::<serde_json::Value>(body)
            .map(|value| Self::from_payload(&value))
            .unwrap_or_default()
    }

    /// Build from an already parsed JSON payload.
    pub fn from_payload(payload: &serde_json::Value) -> Self {
        let Some(object) = payload.as_object() else {
            return Self::default();
        };

        let errors = object
            .iter()
            .filter_map(|(field, value)| {
                message_from_value(value).map(|message| (field.clone(), message))
            })
            .collect();

        Self(errors)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn message_from_value(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(message_from_value).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" "))
            }
        }
        other => Some(other.to_string()),
    }
}

// ============ Addressing ============

/// Identifies one key: `/{org_id}/{project_id}/keys/{key_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyLocator {
    pub org_id: String,
    pub project_id: String,
    pub key_id: String,
}

impl KeyLocator {
    pub fn new(
        org_id: impl Into<String>,
        project_id: impl Into<String>,
        key_id: impl Into<String>,
    ) -> Self {
        Self {
            org_id: org_id.into(),
            project_id: project_id.into(),
            key_id: key_id.into(),
        }
    }
}

impl std::fmt::Display for KeyLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.org_id, self.project_id, self.key_id)
    }
}

/// Which route the update request is sent to.
///
/// `Project` (`PUT /projects/{org}/{project}/`) is what the dashboard has
/// always used; `Key` (`PUT /projects/{org}/{project}/keys/{key}/`) addresses
/// the key resource directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveRoute {
    #[default]
    Project,
    Key,
}

// ============ Lenient deserializers ============

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    I64(i64),
    U64(u64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::I64(n) => n.to_string(),
            Self::U64(n) => n.to_string(),
        }
    }
}

/// Ids are strings in the documented schema but some deployments send numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(StringOrNumber::into_string))
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> KeyRecord {
        let value = json!({
            "id": "k1",
            "name": "Prod",
            "isActive": true,
            "dateCreated": "2020-01-01T00:00:00Z",
            "public": "pub",
            "secret": "sec",
            "projectId": "proj1",
            "dsn": {"secret": "s", "public": "p", "csp": "c"}
        });
        serde_json::from_value(value).unwrap_or_else(|e| panic!("fixture should parse: {e}"))
    }

    #[test]
    fn parses_key_record() {
        let r = record();
        assert_eq!(r.id, "k1");
        assert_eq!(r.name, "Prod");
        assert!(r.is_active);
        assert_eq!(r.project_id, "proj1");
        assert_eq!(r.dsn.csp, "c");
        assert_eq!(r.date_created.to_rfc3339(), "2020-01-01T00:00:00+00:00");
    }

    #[test]
    fn numeric_project_id_and_null_name() {
        let value = json!({
            "id": "k2",
            "name": null,
            "isActive": false,
            "dateCreated": "2021-06-01T12:00:00Z",
            "public": "pub",
            "secret": "sec",
            "projectId": 42,
            "dsn": {"secret": "s", "public": "p", "csp": "c"}
        });
        let r: KeyRecord = serde_json::from_value(value).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(r.project_id, "42");
        assert_eq!(r.name, "");
    }

    #[test]
    fn merge_keeps_unspecified_fields() {
        let original = record();
        let patch = KeyPatch {
            is_active: Some(false),
            ..KeyPatch::default()
        };

        let merged = original.merged(&patch);

        assert!(!merged.is_active);
        assert_eq!(merged.name, "Prod");
        assert_eq!(merged.dsn, original.dsn);
        // the source record is not modified
        assert!(original.is_active);
    }

    #[test]
    fn merge_replaces_dsn_as_a_whole() {
        let original = record();
        let patch = KeyPatch {
            dsn: Some(DsnSet {
                secret: "s2".to_string(),
                public: "p2".to_string(),
                csp: "c2".to_string(),
            }),
            ..KeyPatch::default()
        };

        let merged = original.merged(&patch);
        assert_eq!(merged.dsn.public, "p2");
        assert_eq!(merged.dsn.csp, "c2");
    }

    #[test]
    fn patch_parses_partial_payload() {
        let patch: KeyPatch =
            serde_json::from_value(json!({"isActive": false})).unwrap_or_default();
        assert_eq!(patch.is_active, Some(false));
        assert!(patch.name.is_none());
        assert!(patch.date_created.is_none());
    }

    #[test]
    fn editable_fields_serialize_camel_case() {
        let fields = EditableFields {
            name: "Prod".to_string(),
            is_active: false,
        };
        let value = serde_json::to_value(&fields).unwrap_or_default();
        assert_eq!(value, json!({"name": "Prod", "isActive": false}));
    }

    #[test]
    fn field_errors_from_lists_and_strings() {
        let errors = FieldErrors::from_payload(&json!({
            "name": ["too long", "invalid"],
            "isActive": "must be a boolean",
            "detail": null
        }));
        assert_eq!(errors.get("name"), Some("too long invalid"));
        assert_eq!(errors.get("isActive"), Some("must be a boolean"));
        assert_eq!(errors.get("detail"), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn field_errors_from_non_object_is_empty() {
        assert!(FieldErrors::from_payload(&json!(["oops"])).is_empty());
        assert!(FieldErrors::from_payload(&serde_json::Value::Null).is_empty());
        assert!(FieldErrors::from_response_body("<html>502</html>").is_empty());
        assert!(FieldErrors::from_response_body("").is_empty());
    }

    #[test]
    fn save_route_wire_names() {
        let route: SaveRoute = serde_json::from_value(json!("key")).unwrap_or_default();
        assert_eq!(route, SaveRoute::Key);
        assert_eq!(SaveRoute::default(), SaveRoute::Project);
    }
}
