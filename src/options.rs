//! Global display options: where and how the login buttons are embedded on the
//! public site (login form, registration form, comment section).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AdminError;
use crate::store::{OptionsStore, GLOBAL_OPTIONS_KEY};

/// Submitted form field names, one per stored key.
pub const FIELD_LOGIN_FORM: &str = "quick-login-login-form";
pub const FIELD_LOGIN_STYLE: &str = "quick-login-login-style";
pub const FIELD_REGISTER_FORM: &str = "quick-login-register-form";
pub const FIELD_REGISTER_STYLE: &str = "quick-login-register-style";
pub const FIELD_COMMENT_FORM: &str = "quick-login-comment-form";
pub const FIELD_COMMENT_STYLE: &str = "quick-login-comment-style";

/// Where login buttons appear relative to an embed location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "bottom")]
    Bottom,
    #[serde(rename = "no")]
    No,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Bottom => "bottom",
            Position::No => "no",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Position::Top),
            "bottom" => Some(Position::Bottom),
            "no" => Some(Position::No),
            _ => None,
        }
    }
}

/// Visual style of the embedded logins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "button")]
    Button,
    #[serde(rename = "icon")]
    Icon,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Button => "button",
            Style::Icon => "icon",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "button" => Some(Style::Button),
            "icon" => Some(Style::Icon),
            _ => None,
        }
    }
}

/// The global display-options record: a position and a style for each of the
/// three embed locations. The comment section has no `bottom` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(rename = "login-form")]
    pub login_form: Position,
    #[serde(rename = "login-style")]
    pub login_style: Style,
    #[serde(rename = "register-form")]
    pub register_form: Position,
    #[serde(rename = "register-style")]
    pub register_style: Style,
    #[serde(rename = "comment-form")]
    pub comment_form: Position,
    #[serde(rename = "comment-style")]
    pub comment_style: Style,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            login_form: Position::Top,
            login_style: Style::Icon,
            register_form: Position::Top,
            register_style: Style::Icon,
            comment_form: Position::Top,
            comment_style: Style::Icon,
        }
    }
}

impl DisplayOptions {
    /// Parse the six submitted form fields. All six must be present and valid;
    /// any failure rejects the whole submission so a save never partially
    /// applies.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, AdminError> {
        fn required<'a>(
            fields: &'a HashMap<String, String>,
            name: &str,
        ) -> Result<&'a str, AdminError> {
            fields
                .get(name)
                .map(|s| s.as_str())
                .ok_or_else(|| AdminError::MissingField(name.to_string()))
        }

        fn position(fields: &HashMap<String, String>, name: &str) -> Result<Position, AdminError> {
            Position::parse(required(fields, name)?)
                .ok_or_else(|| AdminError::InvalidField(name.to_string()))
        }

        fn style(fields: &HashMap<String, String>, name: &str) -> Result<Style, AdminError> {
            Style::parse(required(fields, name)?)
                .ok_or_else(|| AdminError::InvalidField(name.to_string()))
        }

        let options = DisplayOptions {
            login_form: position(fields, FIELD_LOGIN_FORM)?,
            login_style: style(fields, FIELD_LOGIN_STYLE)?,
            register_form: position(fields, FIELD_REGISTER_FORM)?,
            register_style: style(fields, FIELD_REGISTER_STYLE)?,
            comment_form: position(fields, FIELD_COMMENT_FORM)?,
            comment_style: style(fields, FIELD_COMMENT_STYLE)?,
        };

        // The comment section offers no bottom placement.
        if options.comment_form == Position::Bottom {
            return Err(AdminError::InvalidField(FIELD_COMMENT_FORM.to_string()));
        }

        Ok(options)
    }

    /// The six stored keys and their values, in record order.
    fn entries(&self) -> [(&'static str, &'static str); 6] {
        [
            ("login-form", self.login_form.as_str()),
            ("login-style", self.login_style.as_str()),
            ("register-form", self.register_form.as_str()),
            ("register-style", self.register_style.as_str()),
            ("comment-form", self.comment_form.as_str()),
            ("comment-style", self.comment_style.as_str()),
        ]
    }
}

/// Read the global display options. Missing or unparseable keys fall back to
/// their defaults, so a render always has a complete record to work with.
pub async fn load_display_options(
    store: &dyn OptionsStore,
) -> Result<DisplayOptions, AdminError> {
    let record = store
        .get(GLOBAL_OPTIONS_KEY)
        .await?
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();

    let defaults = DisplayOptions::default();
    let str_key = |key: &str| -> Option<String> {
        record.get(key).and_then(|v| v.as_str()).map(str::to_string)
    };

    Ok(DisplayOptions {
        login_form: str_key("login-form")
            .as_deref()
            .and_then(Position::parse)
            .unwrap_or(defaults.login_form),
        login_style: str_key("login-style")
            .as_deref()
            .and_then(Style::parse)
            .unwrap_or(defaults.login_style),
        register_form: str_key("register-form")
            .as_deref()
            .and_then(Position::parse)
            .unwrap_or(defaults.register_form),
        register_style: str_key("register-style")
            .as_deref()
            .and_then(Style::parse)
            .unwrap_or(defaults.register_style),
        comment_form: str_key("comment-form")
            .as_deref()
            .and_then(Position::parse)
            .unwrap_or(defaults.comment_form),
        comment_style: str_key("comment-style")
            .as_deref()
            .and_then(Style::parse)
            .unwrap_or(defaults.comment_style),
    })
}

/// Merge the six display-option keys into the stored record, preserving any
/// other keys already present.
pub async fn save_display_options(
    store: &dyn OptionsStore,
    options: DisplayOptions,
) -> Result<(), AdminError> {
    let mut record = store
        .get(GLOBAL_OPTIONS_KEY)
        .await?
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();

    for (key, value) in options.entries() {
        record.insert(key.to_string(), Value::String(value.to_string()));
    }

    store.set(GLOBAL_OPTIONS_KEY, &Value::Object(record)).await
}
