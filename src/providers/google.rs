use super::traits::{InputType, Provider, SettingField};

/// Google login provider descriptor.
pub struct GoogleProvider;

impl GoogleProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoogleProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for GoogleProvider {
    fn id(&self) -> &str {
        "google"
    }

    fn label(&self) -> &str {
        "Google"
    }

    fn color(&self) -> &str {
        "#dc4e41"
    }

    fn icon(&self) -> &str {
        r#"<svg viewBox="0 0 24 24" width="24" height="24" aria-hidden="true"><path fill="currentColor" d="M21.35 11.1H12v2.9h5.35c-.5 2.5-2.6 3.9-5.35 3.9a6 6 0 1 1 0-12c1.5 0 2.9.55 3.95 1.45l2.2-2.2A9.1 9.1 0 0 0 12 2.9a9.1 9.1 0 1 0 0 18.2c5.25 0 8.75-3.7 8.75-8.9 0-.4-.15-.75-.4-1.1z"/></svg>"#
    }

    fn user_settings(&self) -> Vec<SettingField> {
        vec![
            SettingField {
                key: "client_id",
                name: "Client ID",
                input_type: InputType::Text,
                required: true,
                default: "",
            },
            SettingField {
                key: "client_secret",
                name: "Client Secret",
                input_type: InputType::Password,
                required: true,
                default: "",
            },
        ]
    }

    fn instructions(&self) -> String {
        concat!(
            "<ol>",
            "<li>Create a project in the <a href=\"https://console.developers.google.com/\" target=\"_blank\">Google API Console</a></li>",
            "<li>Under <strong>Credentials</strong>, create an OAuth client ID of type Web application and add your site as an authorized redirect URI</li>",
            "<li>Copy the Client ID and Client Secret into the fields below</li>",
            "</ol>"
        )
        .to_string()
    }
}
