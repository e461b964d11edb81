use serde::{Deserialize, Serialize};

/// Lifecycle state of a provider, persisted in its option bag under `status`.
///
/// Transitions happen only through the settings controller: `Setup` → `Enabled`
/// on first settings save, and `Enabled` ↔ `Disabled` via the explicit
/// enable/disable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderStatus {
    #[serde(rename = "needs-setup")]
    NeedsSetup,
    #[serde(rename = "disabled")]
    Disabled,
    #[serde(rename = "enabled")]
    Enabled,
}

impl Default for ProviderStatus {
    fn default() -> Self {
        ProviderStatus::NeedsSetup
    }
}

impl ProviderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderStatus::NeedsSetup => "needs-setup",
            ProviderStatus::Disabled => "disabled",
            ProviderStatus::Enabled => "enabled",
        }
    }

    /// Badge text shown in the provider grid.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderStatus::NeedsSetup => "Needs setup",
            ProviderStatus::Disabled => "Disabled",
            ProviderStatus::Enabled => "Enabled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "needs-setup" => Some(ProviderStatus::NeedsSetup),
            "disabled" => Some(ProviderStatus::Disabled),
            "enabled" => Some(ProviderStatus::Enabled),
            _ => None,
        }
    }
}

/// HTML input type for a user-configurable setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Password,
    Url,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Url => "url",
        }
    }
}

/// One user-configurable setting declared by a provider.
///
/// Declared settings are ordered; the setup form renders them in declaration
/// order and the controller persists exactly this set on save.
#[derive(Debug, Clone)]
pub struct SettingField {
    pub key: &'static str,
    pub name: &'static str,
    pub input_type: InputType,
    pub required: bool,
    pub default: &'static str,
}

/// Trait that every login provider must implement.
///
/// A provider here is a descriptor: identity, branding, the settings it needs
/// from the administrator, and setup instructions. Protocol plumbing lives
/// elsewhere; the admin surface never talks to the provider's servers.
pub trait Provider: Send + Sync {
    /// Unique provider identifier (e.g., "google", "facebook").
    fn id(&self) -> &str;

    /// Human-readable display name (e.g., "Google", "Facebook").
    fn label(&self) -> &str;

    /// Brand color, as a CSS color value.
    fn color(&self) -> &str;

    /// Inline SVG icon markup.
    fn icon(&self) -> &str;

    /// Settings the administrator must fill in before the provider works.
    fn user_settings(&self) -> Vec<SettingField>;

    /// Setup instructions shown above the settings form, as HTML.
    fn instructions(&self) -> String;
}
