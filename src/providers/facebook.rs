use super::traits::{InputType, Provider, SettingField};

/// Facebook login provider descriptor.
pub struct FacebookProvider;

impl FacebookProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FacebookProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for FacebookProvider {
    fn id(&self) -> &str {
        "facebook"
    }

    fn label(&self) -> &str {
        "Facebook"
    }

    fn color(&self) -> &str {
        "#3B5998"
    }

    fn icon(&self) -> &str {
        r#"<svg viewBox="0 0 24 24" width="24" height="24" aria-hidden="true"><path fill="currentColor" d="M22 12a10 10 0 1 0-11.6 9.9v-7H7.9V12h2.5V9.8c0-2.5 1.5-3.9 3.8-3.9 1.1 0 2.2.2 2.2.2v2.5h-1.3c-1.2 0-1.6.8-1.6 1.6V12h2.8l-.4 2.9h-2.4v7A10 10 0 0 0 22 12z"/></svg>"#
    }

    fn user_settings(&self) -> Vec<SettingField> {
        vec![
            SettingField {
                key: "client_id",
                name: "App ID",
                input_type: InputType::Text,
                required: true,
                default: "",
            },
            SettingField {
                key: "client_secret",
                name: "App Secret",
                input_type: InputType::Password,
                required: true,
                default: "",
            },
        ]
    }

    fn instructions(&self) -> String {
        concat!(
            "<ol>",
            "<li>Create an app on <a href=\"https://developers.facebook.com/apps/\" target=\"_blank\">Facebook for Developers</a></li>",
            "<li>Add the <strong>Facebook Login</strong> product and set your site address as a valid OAuth redirect URI</li>",
            "<li>Copy the App ID and App Secret from the app dashboard into the fields below</li>",
            "</ol>"
        )
        .to_string()
    }
}
