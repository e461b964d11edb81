use super::traits::{InputType, Provider, SettingField};

/// Twitter login provider descriptor.
pub struct TwitterProvider;

impl TwitterProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TwitterProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for TwitterProvider {
    fn id(&self) -> &str {
        "twitter"
    }

    fn label(&self) -> &str {
        "Twitter"
    }

    fn color(&self) -> &str {
        "#4ab3f4"
    }

    fn icon(&self) -> &str {
        r#"<svg viewBox="0 0 24 24" width="24" height="24" aria-hidden="true"><path fill="currentColor" d="M22 5.9c-.75.35-1.55.55-2.4.65.85-.5 1.5-1.3 1.8-2.25-.8.45-1.7.8-2.65 1A4.1 4.1 0 0 0 11.7 9a11.7 11.7 0 0 1-8.5-4.3 4.1 4.1 0 0 0 1.3 5.5c-.7 0-1.35-.2-1.9-.5v.05c0 2 1.4 3.65 3.3 4.05a4.2 4.2 0 0 1-1.85.05 4.1 4.1 0 0 0 3.85 2.85A8.25 8.25 0 0 1 2 18.4a11.6 11.6 0 0 0 6.3 1.85c7.55 0 11.7-6.25 11.7-11.7v-.55c.8-.55 1.5-1.3 2-2.1z"/></svg>"#
    }

    fn user_settings(&self) -> Vec<SettingField> {
        vec![
            SettingField {
                key: "api_key",
                name: "API Key",
                input_type: InputType::Text,
                required: true,
                default: "",
            },
            SettingField {
                key: "api_secret",
                name: "API Secret",
                input_type: InputType::Password,
                required: true,
                default: "",
            },
        ]
    }

    fn instructions(&self) -> String {
        concat!(
            "<ol>",
            "<li>Create an app on the <a href=\"https://developer.twitter.com/apps\" target=\"_blank\">Twitter developer portal</a></li>",
            "<li>Enable <strong>Sign in with Twitter</strong> and set your site address as the callback URL</li>",
            "<li>Copy the API Key and API Secret into the fields below</li>",
            "</ol>"
        )
        .to_string()
    }
}
