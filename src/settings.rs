//! Transient dashboard view-model state. None of this persists; every run
//! starts from the defaults, matching the in-memory settings panels.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSettings {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessSettings {
    pub business_name: String,
    pub category: String,
    pub address: String,
    pub website: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub sms_alerts: bool,
    pub marketing_emails: bool,
    pub two_factor_auth: bool,
    pub public_profile: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_alerts: true,
            marketing_emails: false,
            two_factor_auth: false,
            public_profile: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub profile: ProfileSettings,
    pub business: BusinessSettings,
    pub preferences: NotificationPreferences,
    /// Currently expanded settings panel, if any.
    pub active_section: Option<String>,
}
