//! English translations (en-US)
//!
//! Page texts reuse the source strings from `project_keys_core::texts`, so
//! the English table and the core stay in step.

use project_keys_core::texts;

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Project Keys",
        loading: "Loading...",
        retry: "Retry",
        yes: "Yes",
        no: "No",
        quit: "Quit",
    },

    hints: HintTexts {
        move_focus: "Move",
        edit: "Edit",
        toggle: "Toggle",
        save: "Save",
        revoke: "Revoke",
        reveal: "Show secrets",
        retry: "Retry",
        help: "Help",
        quit: "Quit",
    },

    details: DetailsTexts {
        title: "Key Details",
        load_failed: "There was an error loading data.",
        save_failed_banner: texts::SAVE_FAILED_BANNER,
        section_details: texts::SECTION_DETAILS,
        section_credentials: texts::SECTION_CREDENTIALS,
        section_revoke: texts::SECTION_REVOKE,
        name: texts::LABEL_NAME,
        enabled: texts::LABEL_ENABLED,
        created: texts::LABEL_CREATED,
        enabled_help: texts::HELP_ENABLED,
        credentials_help: texts::HELP_CREDENTIALS,
        revoke_help: texts::HELP_REVOKE,
        dsn: "DSN",
        dsn_public: "DSN (Public)",
        dsn_public_help: texts::HELP_DSN_PUBLIC,
        csp_endpoint: "CSP Endpoint",
        csp_endpoint_help: texts::HELP_CSP_ENDPOINT,
        public_key: "Public Key",
        secret_key: "Secret Key",
        project_id: "Project ID",
        save_changes: texts::ACTION_SAVE,
        revoke_key: texts::ACTION_REVOKE,
        removing: "Revoking...",
    },

    key_list: KeyListTexts {
        title: "Client Keys",
        revoked: "The key has been revoked.",
        location: "Location",
    },

    modal: ModalTexts {
        confirm_revoke_title: "Revoke Key",
        revoke_prompt: texts::REVOKE_CONFIRMATION,
        help_title: "Help",
    },

    status_bar: StatusBarTexts {
        saving: texts::SAVING_CHANGES,
        saved: "Changes saved",
        revoked: "Key revoked",
        revoke_failed: "Unable to revoke key",
        nothing_to_save: "No changes to save",
        revoke_not_allowed: "You do not have permission to revoke this key",
        refresh_busy: "Wait for the pending request before refreshing",
    },

    help: HelpTexts {
        lines: &[
            ("Tab / ↑↓", "Move between fields"),
            ("Type", "Edit the key name"),
            ("Space", "Toggle Enabled"),
            ("Enter", "Activate the focused control"),
            ("Ctrl+s", "Save changes"),
            ("Alt+d", "Revoke key"),
            ("Alt+s", "Show or hide secrets"),
            ("Alt+r", "Reload the key"),
            ("Esc", "Close dialog"),
            ("Alt+q / Ctrl+c", "Quit"),
        ],
    },
};
