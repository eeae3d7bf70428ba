//! 页面文案
//!
//! Source strings passed through [`Translator`](crate::traits::Translator);
//! front-ends use them as lookup keys for their own tables.

use project_keys_api::KeyRecord;

/// Indicator text shown while a save or revoke is in flight.
pub const SAVING_CHANGES: &str = "Saving changes..";

/// Question asked before a key is revoked.
pub const REVOKE_CONFIRMATION: &str =
    "Are you sure you want to remove this key? This action is irreversible?";

pub const SAVE_FAILED_BANNER: &str =
    "Unable to save your changes. Please ensure all fields are valid and try again.";

// 标题
pub const SECTION_DETAILS: &str = "Details";
pub const SECTION_CREDENTIALS: &str = "Credentials";
pub const SECTION_REVOKE: &str = "Revoke Key";

// 表单字段
pub const LABEL_NAME: &str = "Name";
pub const LABEL_ENABLED: &str = "Enabled";
pub const LABEL_CREATED: &str = "Created";

pub const HELP_ENABLED: &str =
    "Accept events from this key? This may be used to temporarily suspend a key.";
pub const HELP_CREDENTIALS: &str = "Your credentials are coupled to a public and secret key. Different clients will require different credentials, so make sure you check the documentation before plugging things in.";
pub const HELP_DSN_PUBLIC: &str = "Use your public DSN with browser-based SDKs such as raven-js.";
pub const HELP_CSP_ENDPOINT: &str =
    "Use your CSP endpoint in the report-uri directive in your Content-Security-Policy header.";
pub const HELP_REVOKE: &str = "Revoking this key will immediately remove and suspend the credentials. This action is irreversible.";

// 操作
pub const ACTION_SAVE: &str = "Save Changes";
pub const ACTION_REVOKE: &str = "Revoke Key";

/// Read-only credential strings shown under "Credentials".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    Dsn,
    DsnPublic,
    CspEndpoint,
    PublicKey,
    SecretKey,
    ProjectId,
}

impl CredentialKind {
    /// Display order.
    pub const ALL: [Self; 6] = [
        Self::Dsn,
        Self::DsnPublic,
        Self::CspEndpoint,
        Self::PublicKey,
        Self::SecretKey,
        Self::ProjectId,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dsn => "DSN",
            Self::DsnPublic => "DSN (Public)",
            Self::CspEndpoint => "CSP Endpoint",
            Self::PublicKey => "Public Key",
            Self::SecretKey => "Secret Key",
            Self::ProjectId => "Project ID",
        }
    }

    pub fn help(self) -> Option<&'static str> {
        match self {
            Self::DsnPublic => Some(HELP_DSN_PUBLIC),
            Self::CspEndpoint => Some(HELP_CSP_ENDPOINT),
            _ => None,
        }
    }

    pub fn value(self, record: &KeyRecord) -> &str {
        match self {
            Self::Dsn => &record.dsn.secret,
            Self::DsnPublic => &record.dsn.public,
            Self::CspEndpoint => &record.dsn.csp,
            Self::PublicKey => &record.public,
            Self::SecretKey => &record.secret,
            Self::ProjectId => &record.project_id,
        }
    }

    /// Whether the value must be masked in logs.
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Dsn | Self::SecretKey)
    }
}
