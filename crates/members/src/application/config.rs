//! Application Configuration
//!
//! Explicit configuration object for the catalog builder and orchestrators.
//! The host constructs this once from its own options storage and passes it
//! in; nothing here reads ambient state.

use serde::{Deserialize, Serialize};

use crate::domain::screen::Screen;

/// Default banned login names, overridable per install.
pub const DEFAULT_BANNED_USERNAMES: &[&str] =
    &["admin", "test", "administrator", "password", "testing"];

/// Three-state visibility of an optional field group on one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVisibility {
    Hidden,
    Optional,
    Required,
}

impl FieldVisibility {
    pub fn is_hidden(&self) -> bool {
        matches!(self, FieldVisibility::Hidden)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, FieldVisibility::Required)
    }
}

/// A per-screen setting for the three account-field screens.
///
/// The login screen has a fixed shape and never consults these; it reads as
/// the registration value for totality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerScreen<T> {
    pub registration: T,
    pub checkout: T,
    pub update: T,
}

impl<T> PerScreen<T> {
    /// Same value on every screen.
    pub fn uniform(value: T) -> Self
    where
        T: Copy,
    {
        Self {
            registration: value,
            checkout: value,
            update: value,
        }
    }

    pub fn get(&self, screen: Screen) -> &T {
        match screen {
            Screen::Login | Screen::Registration => &self.registration,
            Screen::Checkout => &self.checkout,
            Screen::Update => &self.update,
        }
    }
}

/// Password strength steps for the graduated minimum policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn name(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }
}

/// Password strength policy, when enforcement is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "policy", content = "minimum")]
pub enum StrengthPolicy {
    /// Fixed "strong" requirement
    Strong,
    /// Graduated minimum
    Minimum(PasswordStrength),
}

/// Module configuration.
#[derive(Serialize, Deserialize)]
pub struct MembersConfig {
    /// Auto-generate login names from the email local part; hides the
    /// username field and makes the login identifier an email address
    pub generate_username: bool,
    /// With generated usernames, resolve the login identifier as an email
    /// to find the stored login before sign-on
    pub resolve_login_from_email: bool,
    /// Show an email-confirmation field, per screen
    pub email_confirmation: PerScreen<bool>,
    /// First/last name group visibility, per screen
    pub names: PerScreen<FieldVisibility>,
    /// Billing address group visibility, per screen
    pub address: PerScreen<FieldVisibility>,
    /// Phone field visibility, per screen
    pub phone: PerScreen<FieldVisibility>,
    /// Password strength enforcement; `None` disables the meter field
    pub password_strength: Option<StrengthPolicy>,
    /// Login names rejected outright
    pub banned_usernames: Vec<String>,
    /// Role assigned to self-registered accounts
    pub registration_role: String,
    /// Target of the lost-password link on the login screen
    pub lost_password_url: String,
}

impl Default for MembersConfig {
    fn default() -> Self {
        Self {
            generate_username: false,
            resolve_login_from_email: true,
            email_confirmation: PerScreen::uniform(false),
            names: PerScreen::uniform(FieldVisibility::Optional),
            address: PerScreen::uniform(FieldVisibility::Hidden),
            phone: PerScreen::uniform(FieldVisibility::Hidden),
            password_strength: None,
            banned_usernames: DEFAULT_BANNED_USERNAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            registration_role: "member".to_string(),
            lost_password_url: "/lost-password".to_string(),
        }
    }
}

impl MembersConfig {
    /// Whether a login name is on the banned list (case-insensitive).
    pub fn username_is_banned(&self, login: &str) -> bool {
        let login = login.to_lowercase();
        self.banned_usernames.iter().any(|b| b.to_lowercase() == login)
    }
}
