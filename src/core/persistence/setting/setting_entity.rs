use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::setting::dto::setting_upsert_request::SettingUpsertRequest;

use super::theme::Theme;

/// Account and display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingEntity {
    /// Name shown in the header of the planner.
    pub display_name: String,
    /// Contact address of the account owner.
    pub email: Option<String>,
    pub theme: Theme,
    /// UI language code (e.g. "en", "de", "pt-BR").
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Version identifier for the settings format.
    pub version: String,
}

impl Default for SettingEntity {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            display_name: "Planner".into(),
            email: None,
            theme: Theme::System,
            language: "en".into(),
            created_at: now,
            updated_at: now,
            version: "1.0.0".into(),
        }
    }
}

impl SettingEntity {
    pub fn apply_update(&mut self, req: SettingUpsertRequest) {
        // stored trimmed, matching what the settings file reads back
        if let Some(v) = req.display_name {
            self.display_name = v.trim().to_string();
        }
        if let Some(v) = req.theme {
            self.theme = v;
        }
        if let Some(v) = req.language {
            self.language = v.trim().to_string();
        }
        if let Some(v) = normalize_string_opt(req.email) {
            self.email = v;
        }

        self.updated_at = Utc::now();
    }
}

/// `Some("")` clears the field, `None` leaves it alone.
fn normalize_string_opt(v: Option<String>) -> Option<Option<String>> {
    match v {
        Some(s) if s.trim().is_empty() => Some(None),
        Some(s) => Some(Some(s.trim().to_string())),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_trims_text_fields() {
        let mut settings = SettingEntity::default();
        let req: SettingUpsertRequest = serde_json::from_value(json!({
            "display_name": " Bob ",
            "language": " pt ",
            "email": " bob@example.com ",
        }))
        .unwrap();

        settings.apply_update(req);

        assert_eq!(settings.display_name, "Bob");
        assert_eq!(settings.language, "pt");
        assert_eq!(settings.email.as_deref(), Some("bob@example.com"));
    }

    #[test]
    fn blank_email_clears_and_absent_fields_stay() {
        let mut settings = SettingEntity {
            email: Some("old@example.com".into()),
            ..SettingEntity::default()
        };
        let req: SettingUpsertRequest = serde_json::from_value(json!({ "email": "  " })).unwrap();

        settings.apply_update(req);

        assert!(settings.email.is_none());
        assert_eq!(settings.language, "en");
    }
}
