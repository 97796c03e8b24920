use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single global settings record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub company_name: String,
    pub contact_email: String,
    pub address: String,
    pub allow_remote_clock_in: bool,
    pub dark_mode: bool,
    pub auto_approve_leave: bool,
    pub maintenance_mode: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` keeps the stored value. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingPatch {
    pub company_name: Option<String>,
    pub contact_email: Option<String>,
    pub address: Option<String>,
    pub allow_remote_clock_in: Option<bool>,
    pub dark_mode: Option<bool>,
    pub auto_approve_leave: Option<bool>,
    pub maintenance_mode: Option<bool>,
}

impl Setting {
    pub fn merge(&mut self, patch: SettingPatch) {
        if let Some(company_name) = patch.company_name {
            self.company_name = company_name;
        }
        if let Some(contact_email) = patch.contact_email {
            self.contact_email = contact_email;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(allow_remote_clock_in) = patch.allow_remote_clock_in {
            self.allow_remote_clock_in = allow_remote_clock_in;
        }
        if let Some(dark_mode) = patch.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(auto_approve_leave) = patch.auto_approve_leave {
            self.auto_approve_leave = auto_approve_leave;
        }
        if let Some(maintenance_mode) = patch.maintenance_mode {
            self.maintenance_mode = maintenance_mode;
        }
        self.updated_at = Utc::now();
    }
}

impl Default for Setting {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            company_name: "EMS Nexus".to_string(),
            contact_email: "admin@nexus.io".to_string(),
            address: "123 Tech Park".to_string(),
            allow_remote_clock_in: true,
            dark_mode: false,
            auto_approve_leave: false,
            maintenance_mode: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_only_touches_given_fields() {
        let mut setting = Setting {
            company_name: "Acme".to_string(),
            ..Default::default()
        };
        let before = setting.clone();

        setting.merge(SettingPatch {
            dark_mode: Some(true),
            ..Default::default()
        });

        assert!(setting.dark_mode);
        assert_eq!(setting.company_name, "Acme");
        assert_eq!(setting.contact_email, before.contact_email);
        assert_eq!(setting.address, before.address);
        assert_eq!(setting.allow_remote_clock_in, before.allow_remote_clock_in);
        assert_eq!(setting.auto_approve_leave, before.auto_approve_leave);
        assert_eq!(setting.maintenance_mode, before.maintenance_mode);
        assert_eq!(setting.created_at, before.created_at);
    }

    #[test]
    fn test_patch_ignores_unknown_keys() {
        let patch: SettingPatch =
            serde_json::from_str(r#"{"autoApproveLeave": true, "theme": "blue"}"#).unwrap();

        assert_eq!(patch.auto_approve_leave, Some(true));
        assert_eq!(patch.dark_mode, None);
    }

    #[test]
    fn test_defaults() {
        let setting = Setting::default();

        assert_eq!(setting.company_name, "EMS Nexus");
        assert!(setting.allow_remote_clock_in);
        assert!(!setting.auto_approve_leave);
        assert!(!setting.maintenance_mode);
    }
}
