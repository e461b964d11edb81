//! Settings page renderer.
//!
//! Pure functions from (provider views, display options, request parameters)
//! to markup; identical inputs produce byte-identical output. Handlers wrap
//! the result in `axum::response::Html`.

use serde_json::{Map, Value};

use super::notices::{render_notices, Notice};
use super::{PARAM_PROVIDER_DISABLE, PARAM_PROVIDER_ENABLE, PARAM_PROVIDER_SETTINGS, SETTINGS_PATH};
use crate::options::{
    DisplayOptions, Position, Style, FIELD_COMMENT_FORM, FIELD_COMMENT_STYLE, FIELD_LOGIN_FORM,
    FIELD_LOGIN_STYLE, FIELD_REGISTER_FORM, FIELD_REGISTER_STYLE,
};
use crate::providers::{Provider, ProviderRegistry, ProviderStatus};
use crate::store::{self, OptionsStore};
use crate::AdminError;

/// Brand colors used in the display previews, matching the default providers.
const PREVIEW_COLORS: [&str; 4] = ["#3B5998", "#dc4e41", "#4ab3f4", "#21759B"];

/// Escape text for an HTML body context.
pub fn esc_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for an HTML attribute value.
pub fn esc_attr(s: &str) -> String {
    esc_html(s).replace('"', "&quot;").replace('\'', "&#39;")
}

/// Snapshot of one provider for rendering: descriptor fields plus the status
/// read from persistence at render time.
#[derive(Debug, Clone)]
pub struct ProviderView {
    pub id: String,
    pub label: String,
    pub color: String,
    pub icon: String,
    pub status: ProviderStatus,
}

/// Collect render snapshots for every registered provider, in registration
/// order. Status is re-read from the store on every call; nothing is cached.
pub async fn provider_views(
    registry: &ProviderRegistry,
    store: &dyn OptionsStore,
) -> Result<Vec<ProviderView>, AdminError> {
    let mut views = Vec::with_capacity(registry.count());
    for provider in registry.iter() {
        views.push(ProviderView {
            id: provider.id().to_string(),
            label: provider.label().to_string(),
            color: provider.color().to_string(),
            icon: provider.icon().to_string(),
            status: store::provider_status(store, provider.id()).await?,
        });
    }
    Ok(views)
}

/// Action links contributed to the host's plugin listing: a `Settings` link
/// prepended to whatever links the listing already carries.
pub fn action_links(existing: &[(String, String)]) -> Vec<(String, String)> {
    let mut links = vec![(
        "settings".to_string(),
        format!("<a href=\"{SETTINGS_PATH}\">Settings</a>"),
    )];
    links.extend(existing.iter().cloned());
    links
}

fn page_wrap(notices: &[Notice], body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Quick Login Options</title></head>\n<body>\n\
         {}<div class=\"wrap about-wrap quick-login-wrap\">\n<h1>Quick Login</h1>\n{}</div>\n</body>\n</html>\n",
        render_notices(notices),
        body,
    )
}

// ── Overview mode ───────────────────────────────────────────────────────────

/// Render the default settings page: provider grid, display-options form and
/// embed documentation.
pub fn render_overview(
    views: &[ProviderView],
    options: DisplayOptions,
    notices: &[Notice],
    site_url: &str,
) -> String {
    let mut body = String::new();

    body.push_str(
        "<p class=\"about-text\">Let your visitors log in quicker with their existing accounts!</p>\n",
    );

    body.push_str("<h3><span>1.</span> Enable login providers</h3>\n");
    body.push_str("<div class=\"quick-login-admin-providers\">\n");
    for view in views {
        body.push_str(&provider_card(view));
    }
    body.push_str("</div>\n");

    body.push_str("<h3><span>2.</span> Where should the logins be displayed?</h3>\n");
    body.push_str(&display_options_form(options));

    body.push_str("<h3><span>3.</span> Embed login buttons on more pages</h3>\n");
    body.push_str(&embed_docs(site_url));

    page_wrap(notices, &body)
}

fn provider_card(view: &ProviderView) -> String {
    let settings_link = if view.status != ProviderStatus::NeedsSetup {
        format!(
            "<a href=\"{SETTINGS_PATH}?{PARAM_PROVIDER_SETTINGS}={}\">Settings</a>",
            esc_attr(&view.id)
        )
    } else {
        String::new()
    };

    let action_link = match view.status {
        ProviderStatus::NeedsSetup => format!(
            "<a href=\"{SETTINGS_PATH}?{PARAM_PROVIDER_SETTINGS}={}\" class=\"quick-login-admin-provider-action\">Setup</a>",
            esc_attr(&view.id)
        ),
        ProviderStatus::Disabled => format!(
            "<a href=\"{SETTINGS_PATH}?{PARAM_PROVIDER_ENABLE}={}\" class=\"quick-login-admin-provider-action\">Enable</a>",
            esc_attr(&view.id)
        ),
        ProviderStatus::Enabled => format!(
            "<a href=\"{SETTINGS_PATH}?{PARAM_PROVIDER_DISABLE}={}\" class=\"quick-login-admin-provider-action\">Disable</a>",
            esc_attr(&view.id)
        ),
    };

    format!(
        "<div class=\"quick-login-admin-provider\" style=\"--quick-login-color: {color}\">\n\
         <div class=\"quick-login-admin-provider-name\">{icon}<p>{label}</p>{settings_link}</div>\n\
         <div class=\"quick-login-admin-provider-actions\">{action_link}\
         <span class=\"quick-login-admin-provider-status quick-login-status-{status}\"></span>{status_label}</div>\n\
         </div>\n",
        color = esc_attr(&view.color),
        icon = view.icon,
        label = esc_html(&view.label),
        status = view.status.as_str(),
        status_label = view.status.label(),
    )
}

fn display_options_form(options: DisplayOptions) -> String {
    let login_row = options_row(
        "Login form",
        Some("WP &amp; WooCommerce"),
        FIELD_LOGIN_FORM,
        FIELD_LOGIN_STYLE,
        options.login_form,
        options.login_style,
        true,
        2,
        false,
    );
    let register_row = options_row(
        "Register form",
        Some("WP &amp; WooCommerce"),
        FIELD_REGISTER_FORM,
        FIELD_REGISTER_STYLE,
        options.register_form,
        options.register_style,
        true,
        3,
        false,
    );
    let comment_row = options_row(
        "Comment section",
        None,
        FIELD_COMMENT_FORM,
        FIELD_COMMENT_STYLE,
        options.comment_form,
        options.comment_style,
        false,
        3,
        true,
    );

    format!(
        "<form method=\"post\">\n<table class=\"form-table\">\n<tbody>\n{login_row}{register_row}{comment_row}</tbody>\n</table>\n\
         <p class=\"submit\"><input type=\"submit\" name=\"quick-login-settings\" class=\"button button-primary\" value=\"Save Changes\"></p>\n\
         </form>\n"
    )
}

#[allow(clippy::too_many_arguments)]
fn options_row(
    heading: &str,
    description: Option<&str>,
    position_field: &str,
    style_field: &str,
    position: Position,
    style: Style,
    with_bottom: bool,
    preview_fields: usize,
    preview_double: bool,
) -> String {
    let description = description
        .map(|d| format!("<p class=\"description\">{d}</p>"))
        .unwrap_or_default();

    let mut position_radios = String::new();
    position_radios.push_str(&radio(position_field, "top", "Top", position.as_str()));
    if with_bottom {
        position_radios.push_str(&radio(position_field, "bottom", "Bottom", position.as_str()));
    }
    position_radios.push_str(&radio(position_field, "no", "Hidden", position.as_str()));

    let mut style_radios = String::new();
    style_radios.push_str(&radio(style_field, "button", "Buttons", style.as_str()));
    style_radios.push_str(&radio(style_field, "icon", "Icons", style.as_str()));

    format!(
        "<tr class=\"quick-login-form-preview\">\n\
         <th scope=\"row\"><label>{heading}</label>{description}</th>\n\
         <td><fieldset><legend>Position</legend>\n{position_radios}</fieldset></td>\n\
         <td><fieldset><legend>Button style</legend>\n{style_radios}</fieldset></td>\n\
         <td>{preview}</td>\n\
         </tr>\n",
        preview = preview_panel(position, style, preview_fields, preview_double, with_bottom),
    )
}

fn radio(name: &str, value: &str, label: &str, current: &str) -> String {
    let class = if name.ends_with("-style") {
        "quick-login-style"
    } else {
        "quick-login-position"
    };
    format!(
        "<label><input type=\"radio\" name=\"{name}\" class=\"{class}\" value=\"{value}\"{checked}> {label}</label><br>\n",
        checked = if current == value { " checked" } else { "" },
    )
}

/// Live preview panel classed by the currently selected position and style.
fn preview_panel(
    position: Position,
    style: Style,
    fields: usize,
    double_field: bool,
    with_bottom: bool,
) -> String {
    let buttons: String = PREVIEW_COLORS[..2]
        .iter()
        .map(|c| format!("<div class=\"quick-login-button\" style=\"--quick-login-color: {c}\"></div>"))
        .collect();
    let icons: String = PREVIEW_COLORS
        .iter()
        .map(|c| format!("<div class=\"quick-login-icon\" style=\"--quick-login-color: {c}\"></div>"))
        .collect();

    let mut panel = format!(
        "<div class=\"preview-login preview-position-{} preview-style-{}\">\n",
        position.as_str(),
        style.as_str(),
    );

    panel.push_str(&format!(
        "<div class=\"quick-login-buttons on-top\">{buttons}</div>\n\
         <div class=\"quick-login-icons on-top\">{icons}</div>\n\
         <div class=\"quick-login-separator on-top\"><span>or</span></div>\n"
    ));

    for i in 0..fields {
        if double_field && i == fields - 1 {
            panel.push_str("<div class=\"preview-field field-double\"></div>\n");
        } else {
            panel.push_str("<div class=\"preview-field\"></div>\n");
        }
    }
    panel.push_str("<div class=\"preview-button\"></div>\n");

    if with_bottom {
        panel.push_str(&format!(
            "<div class=\"quick-login-separator on-bottom\"><span>or</span></div>\n\
             <div class=\"quick-login-buttons on-bottom\">{buttons}</div>\n\
             <div class=\"quick-login-icons on-bottom\">{icons}</div>\n"
        ));
    }

    panel.push_str("</div>");
    panel
}

fn embed_docs(site_url: &str) -> String {
    format!(
        "<table class=\"form-table\" width=\"100%\">\n<tbody>\n\
         <tr>\n\
         <th><label>Shortcode</label><p class=\"description\">Add login buttons in pages, articles or widgets</p></th>\n\
         <td><textarea class=\"code large-text\" cols=\"30\" rows=\"5\" readonly>[quick-login style=&quot;icon&quot; separator=&quot;bottom&quot; heading=&quot;Login with&quot;]</textarea></td>\n\
         <td><fieldset><legend>Attributes</legend>\n\
         <label><strong>style</strong> - <code>button</code> or <code>icon</code></label><br>\n\
         <label><strong>separator</strong> - <code>no</code>, <code>top</code> or <code>bottom</code></label><br>\n\
         <label><strong>heading</strong> - custom heading text, ex: <code>Sign in here:</code></label>\n\
         </fieldset></td>\n\
         </tr>\n\
         <tr>\n\
         <th><label>Link</label><p class=\"description\">Point images or buttons at this link for login</p></th>\n\
         <td><code>{site}/wp-login.php?quick-login=<u>google</u></code></td>\n\
         <td><fieldset><legend>Parameters</legend>\n\
         <label><strong>quick-login</strong> - <code>google</code>, <code>facebook</code> or another enabled provider</label><br>\n\
         <label><strong>redirect_to</strong> - post login redirect URL, default is site homepage</label><br>\n\
         </fieldset></td>\n\
         </tr>\n\
         </tbody>\n</table>\n",
        site = esc_html(site_url),
    )
}

// ── Provider setup mode ─────────────────────────────────────────────────────

/// Render the per-provider setup page: instructions followed by one labeled
/// input per declared setting, pre-filled from the persisted bag or the
/// setting's default.
pub fn render_setup(
    provider: &dyn Provider,
    bag: &Map<String, Value>,
    notices: &[Notice],
) -> String {
    let mut rows = String::new();
    for setting in provider.user_settings() {
        let value = bag
            .get(setting.key)
            .and_then(|v| v.as_str())
            .unwrap_or(setting.default);
        rows.push_str(&format!(
            "<tr>\n\
             <th scope=\"row\"><label for=\"{key}\">{name}</label></th>\n\
             <td><input name=\"{key}\" type=\"{input_type}\" id=\"{key}\"{required} value=\"{value}\" class=\"regular-text\"></td>\n\
             </tr>\n",
            key = esc_attr(setting.key),
            name = esc_html(setting.name),
            input_type = setting.input_type.as_str(),
            required = if setting.required { " required" } else { "" },
            value = esc_attr(value),
        ));
    }

    let body = format!(
        "<h3>Set up {label}</h3>\n\
         {instructions}\n\
         <form method=\"post\">\n<table class=\"form-table\">\n<tbody>\n{rows}</tbody>\n<tfoot>\n<tr>\n\
         <td><p><a href=\"{SETTINGS_PATH}\" class=\"button button-secondary\">Cancel</a></p></td>\n\
         <td><p class=\"regular-text text-right\"><input type=\"submit\" name=\"quick-login-provider-settings-save\" id=\"submit\" class=\"button button-primary\" value=\"Save settings\"></p></td>\n\
         </tr>\n</tfoot>\n</table>\n</form>\n",
        label = esc_html(provider.label()),
        instructions = provider.instructions(),
    );

    page_wrap(notices, &body)
}
