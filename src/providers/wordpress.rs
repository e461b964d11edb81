use super::traits::{InputType, Provider, SettingField};

/// WordPress.com login provider descriptor.
pub struct WordPressProvider;

impl WordPressProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordPressProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for WordPressProvider {
    fn id(&self) -> &str {
        "wordpress"
    }

    fn label(&self) -> &str {
        "WordPress.com"
    }

    fn color(&self) -> &str {
        "#21759B"
    }

    fn icon(&self) -> &str {
        r#"<svg viewBox="0 0 24 24" width="24" height="24" aria-hidden="true"><path fill="currentColor" d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM3.6 12c0-1.2.25-2.35.7-3.4l3.95 10.8A8.4 8.4 0 0 1 3.6 12zm8.4 8.4c-.8 0-1.6-.1-2.35-.35l2.5-7.25 2.55 7a.5.5 0 0 0 .05.15 8.4 8.4 0 0 1-2.75.45zm1.15-12.35c.5-.05.95-.1.95-.1.45-.05.4-.7-.05-.7 0 0-1.35.1-2.2.1-.8 0-2.2-.1-2.2-.1-.45 0-.5.7-.05.7 0 0 .45.05.9.1l1.3 3.6-1.85 5.5-3.05-9.1c.5-.05.95-.1.95-.1.45-.05.4-.7-.05-.7 0 0-1.35.1-2.2.1h-.55A8.4 8.4 0 0 1 12 3.6c2.2 0 4.2.85 5.7 2.2h-.1c-.8 0-1.4.7-1.4 1.45 0 .7.4 1.25.8 1.95.3.55.7 1.25.7 2.3 0 .7-.3 1.55-.65 2.7l-.85 2.8-3.05-9zm3.1 11.2 2.55-7.4c.5-1.2.65-2.15.65-3 0-.3-.05-.6-.1-.85a8.4 8.4 0 0 1-3.1 11.25z"/></svg>"#
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
            "<li>Create an application on <a href=\"https://developer.wordpress.com/apps/\" target=\"_blank\">WordPress.com Developer Resources</a></li>",
            "<li>Set your site address as the <strong>Redirect URL</strong></li>",
            "<li>Copy the Client ID and Client Secret into the fields below</li>",
            "</ol>"
        )
        .to_string()
    }
}
