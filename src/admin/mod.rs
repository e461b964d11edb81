//! The admin surface: request routing, the settings controller, notice
//! computation and page rendering.

pub mod actions;
pub mod notices;
pub mod page;
pub mod routes;

pub use actions::{AdminAction, AdminResponse};
pub use notices::Notice;
pub use routes::router;

/// Path of the settings page.
pub const SETTINGS_PATH: &str = "/admin/quick-login";

// Request parameter names recognized by the settings page. Kept stable so
// existing bookmarks and integrations keep working.
pub const PARAM_PROVIDER_SETTINGS: &str = "quick-login-provider-settings";
pub const PARAM_PROVIDER_SETTINGS_SAVE: &str = "quick-login-provider-settings-save";
pub const PARAM_PROVIDER_ENABLE: &str = "quick-login-provider-enable";
pub const PARAM_PROVIDER_DISABLE: &str = "quick-login-provider-disable";
pub const PARAM_SETTINGS_SAVE: &str = "quick-login-settings";
pub const PARAM_ALERT: &str = "quick-login-alert";
pub const PARAM_ALERT_TYPE: &str = "alert-type";
