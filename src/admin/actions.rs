//! The settings controller: interprets administrative request markers, mutates
//! persisted configuration and answers with a redirect carrying a
//! human-readable status message.

use std::collections::HashMap;

use axum::response::{Html, IntoResponse, Redirect, Response};
use serde_json::{Map, Value};
use tracing::info;

use super::{
    PARAM_ALERT, PARAM_ALERT_TYPE, PARAM_PROVIDER_DISABLE, PARAM_PROVIDER_ENABLE,
    PARAM_PROVIDER_SETTINGS, PARAM_PROVIDER_SETTINGS_SAVE, PARAM_SETTINGS_SAVE,
};
use crate::error::AdminError;
use crate::options::{self, DisplayOptions};
use crate::providers::{ProviderRegistry, ProviderStatus};
use crate::store::{self, OptionsStore};

/// One administrative action, parsed from request parameters. Markers are
/// mutually exclusive; at most one action is performed per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    EnableProvider(String),
    DisableProvider(String),
    SaveProviderSettings {
        provider_id: String,
        fields: HashMap<String, String>,
    },
    SaveDisplayOptions(HashMap<String, String>),
}

/// Outcome of handling an admin request. The caller decides the transport
/// effect instead of the handler terminating the request itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminResponse {
    /// Redirect to `url`; every state-changing action ends here.
    Redirect(String),
    /// Rendered settings page markup.
    Page(String),
}

impl IntoResponse for AdminResponse {
    fn into_response(self) -> Response {
        match self {
            AdminResponse::Redirect(url) => Redirect::to(&url).into_response(),
            AdminResponse::Page(html) => Html(html).into_response(),
        }
    }
}

impl AdminAction {
    /// Parse an action from query parameters (enable/disable links).
    pub fn from_query(query: &HashMap<String, String>) -> Option<AdminAction> {
        if let Some(id) = query.get(PARAM_PROVIDER_ENABLE) {
            return Some(AdminAction::EnableProvider(id.clone()));
        }
        if let Some(id) = query.get(PARAM_PROVIDER_DISABLE) {
            return Some(AdminAction::DisableProvider(id.clone()));
        }
        None
    }

    /// Parse an action from a form submission. The provider-settings form
    /// posts back to its own URL, so the provider id rides in the query.
    pub fn from_post(
        query: &HashMap<String, String>,
        form: &HashMap<String, String>,
    ) -> Result<Option<AdminAction>, AdminError> {
        if form.contains_key(PARAM_PROVIDER_SETTINGS_SAVE) {
            let provider_id = query
                .get(PARAM_PROVIDER_SETTINGS)
                .cloned()
                .ok_or_else(|| AdminError::MissingField(PARAM_PROVIDER_SETTINGS.to_string()))?;
            return Ok(Some(AdminAction::SaveProviderSettings {
                provider_id,
                fields: form.clone(),
            }));
        }
        if form.contains_key(PARAM_SETTINGS_SAVE) {
            return Ok(Some(AdminAction::SaveDisplayOptions(form.clone())));
        }
        Ok(None)
    }
}

/// Perform one administrative action against the store and produce the
/// redirect target for the follow-up render.
pub async fn handle(
    registry: &ProviderRegistry,
    store: &dyn OptionsStore,
    settings_url: &str,
    action: AdminAction,
) -> Result<AdminResponse, AdminError> {
    match action {
        AdminAction::EnableProvider(id) => {
            let provider = registry
                .get(&id)
                .ok_or_else(|| AdminError::ProviderNotFound(id.clone()))?;

            let mut patch = Map::new();
            patch.insert("status".into(), status_value(ProviderStatus::Enabled));
            store::update_provider_options(store, &id, patch).await?;
            info!(provider = %id, "provider enabled");

            let message = format!("{} is enabled!", provider.label());
            Ok(redirect_with_alert(settings_url, &message, false))
        }

        AdminAction::DisableProvider(id) => {
            let provider = registry
                .get(&id)
                .ok_or_else(|| AdminError::ProviderNotFound(id.clone()))?;

            let mut patch = Map::new();
            patch.insert("status".into(), status_value(ProviderStatus::Disabled));
            store::update_provider_options(store, &id, patch).await?;
            info!(provider = %id, "provider disabled");

            let message = format!("{} is disabled", provider.label());
            Ok(redirect_with_alert(settings_url, &message, true))
        }

        AdminAction::SaveProviderSettings {
            provider_id,
            fields,
        } => {
            let provider = registry
                .get(&provider_id)
                .ok_or_else(|| AdminError::ProviderNotFound(provider_id.clone()))?;

            let mut patch = Map::new();

            // First successful setup promotes the provider straight to enabled.
            if store::provider_status(store, &provider_id).await? == ProviderStatus::NeedsSetup {
                patch.insert("status".into(), status_value(ProviderStatus::Enabled));
            }

            // Collect every declared setting before writing anything, so a
            // missing required field rejects the submission atomically.
            for setting in provider.user_settings() {
                match fields.get(setting.key) {
                    Some(value) => {
                        patch.insert(setting.key.to_string(), Value::String(value.clone()));
                    }
                    None if setting.required => {
                        return Err(AdminError::MissingField(setting.key.to_string()));
                    }
                    // Optional field not submitted: previous value stays.
                    None => {}
                }
            }

            store::update_provider_options(store, &provider_id, patch).await?;
            info!(provider = %provider_id, "provider settings updated");

            let message = format!("Settings for {} are updated", provider.label());
            Ok(redirect_with_alert(settings_url, &message, false))
        }

        AdminAction::SaveDisplayOptions(fields) => {
            let parsed = DisplayOptions::from_fields(&fields)?;
            options::save_display_options(store, parsed).await?;
            info!("display options updated");

            Ok(redirect_with_alert(
                settings_url,
                "Quick Login options are updated",
                false,
            ))
        }
    }
}

fn status_value(status: ProviderStatus) -> Value {
    Value::String(status.as_str().to_string())
}

fn redirect_with_alert(settings_url: &str, message: &str, warning: bool) -> AdminResponse {
    let mut url = format!("{settings_url}?{PARAM_ALERT}={}", urlencode(message));
    if warning {
        url.push_str(&format!("&{PARAM_ALERT_TYPE}=warning"));
    }
    AdminResponse::Redirect(url)
}

/// Simple percent-encoding for URL parameters.
fn urlencode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{register_defaults, GoogleProvider, Provider};
    use crate::store::{provider_options, provider_status, MemoryStore};
    use serde_json::json;

    const SETTINGS_URL: &str = "http://localhost:8430/admin/quick-login";

    fn registry() -> ProviderRegistry {
        let mut registry = ProviderRegistry::new();
        register_defaults(&mut registry);
        registry
    }

    fn settings_form(marker: &str, extra: &[(&str, &str)]) -> HashMap<String, String> {
        let mut form: HashMap<String, String> = extra
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        form.insert(marker.to_string(), "1".to_string());
        form
    }

    #[tokio::test]
    async fn enable_sets_status_and_nothing_else() {
        let registry = registry();
        let store = MemoryStore::new();
        store
            .set("quick-login-google", &json!({ "client_id": "abc", "status": "disabled" }))
            .await
            .unwrap();

        let response = handle(
            &registry,
            &store,
            SETTINGS_URL,
            AdminAction::EnableProvider("google".into()),
        )
        .await
        .unwrap();

        let bag = provider_options(&store, "google").await.unwrap();
        assert_eq!(bag.get("status"), Some(&json!("enabled")));
        assert_eq!(bag.get("client_id"), Some(&json!("abc")));
        assert_eq!(bag.len(), 2);

        match response {
            AdminResponse::Redirect(url) => {
                assert!(url.starts_with(SETTINGS_URL));
                assert!(url.contains("quick-login-alert=Google+is+enabled%21"));
                assert!(!url.contains("alert-type"));
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn enable_is_explicit_even_from_needs_setup() {
        // A partial earlier save left client_id populated but the provider was
        // never promoted; explicit enable still wins.
        let registry = registry();
        let store = MemoryStore::new();
        store
            .set("quick-login-google", &json!({ "client_id": "abc" }))
            .await
            .unwrap();
        assert_eq!(
            provider_status(&store, "google").await.unwrap(),
            ProviderStatus::NeedsSetup
        );

        handle(
            &registry,
            &store,
            SETTINGS_URL,
            AdminAction::EnableProvider("google".into()),
        )
        .await
        .unwrap();

        assert_eq!(
            provider_status(&store, "google").await.unwrap(),
            ProviderStatus::Enabled
        );
    }

    #[tokio::test]
    async fn disable_keeps_other_settings() {
        let registry = registry();
        let store = MemoryStore::new();
        store
            .set(
                "quick-login-facebook",
                &json!({ "client_id": "id", "client_secret": "shh", "status": "enabled" }),
            )
            .await
            .unwrap();

        let response = handle(
            &registry,
            &store,
            SETTINGS_URL,
            AdminAction::DisableProvider("facebook".into()),
        )
        .await
        .unwrap();

        let bag = provider_options(&store, "facebook").await.unwrap();
        assert_eq!(bag.get("status"), Some(&json!("disabled")));
        assert_eq!(bag.get("client_secret"), Some(&json!("shh")));

        match response {
            AdminResponse::Redirect(url) => {
                assert!(url.contains("quick-login-alert=Facebook+is+disabled"));
                assert!(url.contains("alert-type=warning"));
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn first_settings_save_promotes_to_enabled() {
        let registry = registry();
        let store = MemoryStore::new();

        let fields = settings_form(
            PARAM_PROVIDER_SETTINGS_SAVE,
            &[("client_id", "id-123"), ("client_secret", "secret-456")],
        );
        let response = handle(
            &registry,
            &store,
            SETTINGS_URL,
            AdminAction::SaveProviderSettings {
                provider_id: "google".into(),
                fields,
            },
        )
        .await
        .unwrap();

        let bag = provider_options(&store, "google").await.unwrap();
        assert_eq!(bag.get("status"), Some(&json!("enabled")));
        assert_eq!(bag.get("client_id"), Some(&json!("id-123")));
        assert_eq!(bag.get("client_secret"), Some(&json!("secret-456")));

        match response {
            AdminResponse::Redirect(url) => {
                assert!(url.contains("quick-login-alert=Settings+for+Google+are+updated"));
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn settings_save_does_not_re_enable_a_disabled_provider() {
        let registry = registry();
        let store = MemoryStore::new();
        store
            .set("quick-login-google", &json!({ "status": "disabled" }))
            .await
            .unwrap();

        let fields = settings_form(
            PARAM_PROVIDER_SETTINGS_SAVE,
            &[("client_id", "id"), ("client_secret", "secret")],
        );
        handle(
            &registry,
            &store,
            SETTINGS_URL,
            AdminAction::SaveProviderSettings {
                provider_id: "google".into(),
                fields,
            },
        )
        .await
        .unwrap();

        assert_eq!(
            provider_status(&store, "google").await.unwrap(),
            ProviderStatus::Disabled
        );
    }

    #[tokio::test]
    async fn settings_save_missing_required_field_writes_nothing() {
        let registry = registry();
        let store = MemoryStore::new();

        let fields = settings_form(PARAM_PROVIDER_SETTINGS_SAVE, &[("client_id", "only-id")]);
        let err = handle(
            &registry,
            &store,
            SETTINGS_URL,
            AdminAction::SaveProviderSettings {
                provider_id: "google".into(),
                fields,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AdminError::MissingField(f) if f == "client_secret"));
        let bag = provider_options(&store, "google").await.unwrap();
        assert!(bag.is_empty());
    }

    #[tokio::test]
    async fn unknown_provider_is_rejected() {
        let registry = registry();
        let store = MemoryStore::new();

        for action in [
            AdminAction::EnableProvider("myspace".into()),
            AdminAction::DisableProvider("myspace".into()),
            AdminAction::SaveProviderSettings {
                provider_id: "myspace".into(),
                fields: HashMap::new(),
            },
        ] {
            let err = handle(&registry, &store, SETTINGS_URL, action)
                .await
                .unwrap_err();
            assert!(matches!(err, AdminError::ProviderNotFound(id) if id == "myspace"));
        }
    }

    #[tokio::test]
    async fn display_options_save_redirects_with_message() {
        let registry = registry();
        let store = MemoryStore::new();

        let fields = settings_form(
            PARAM_SETTINGS_SAVE,
            &[
                ("quick-login-login-form", "top"),
                ("quick-login-login-style", "icon"),
                ("quick-login-register-form", "bottom"),
                ("quick-login-register-style", "button"),
                ("quick-login-comment-form", "no"),
                ("quick-login-comment-style", "icon"),
            ],
        );
        let response = handle(
            &registry,
            &store,
            SETTINGS_URL,
            AdminAction::SaveDisplayOptions(fields),
        )
        .await
        .unwrap();

        match response {
            AdminResponse::Redirect(url) => {
                assert!(url.contains("quick-login-alert=Quick+Login+options+are+updated"));
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn display_options_save_with_missing_field_leaves_record_untouched() {
        let registry = registry();
        let store = MemoryStore::new();
        store
            .set("quick-login", &json!({ "login-form": "bottom" }))
            .await
            .unwrap();

        let fields = settings_form(
            PARAM_SETTINGS_SAVE,
            &[("quick-login-login-form", "top")],
        );
        let err = handle(
            &registry,
            &store,
            SETTINGS_URL,
            AdminAction::SaveDisplayOptions(fields),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AdminError::MissingField(_)));
        let record = store.get("quick-login").await.unwrap().unwrap();
        assert_eq!(record, json!({ "login-form": "bottom" }));
    }

    #[test]
    fn post_parsing_requires_the_provider_id_in_the_query() {
        let query = HashMap::new();
        let form = settings_form(PARAM_PROVIDER_SETTINGS_SAVE, &[]);
        let err = AdminAction::from_post(&query, &form).unwrap_err();
        assert!(matches!(err, AdminError::MissingField(f) if f == PARAM_PROVIDER_SETTINGS));

        let query: HashMap<String, String> =
            [(PARAM_PROVIDER_SETTINGS.to_string(), "google".to_string())].into();
        let action = AdminAction::from_post(&query, &form).unwrap().unwrap();
        assert!(matches!(
            action,
            AdminAction::SaveProviderSettings { provider_id, .. } if provider_id == "google"
        ));
    }

    #[test]
    fn query_parsing_picks_at_most_one_marker() {
        let query: HashMap<String, String> = [
            (PARAM_PROVIDER_ENABLE.to_string(), "google".to_string()),
            (PARAM_PROVIDER_DISABLE.to_string(), "facebook".to_string()),
        ]
        .into();
        // Enable is checked first and wins.
        assert_eq!(
            AdminAction::from_query(&query),
            Some(AdminAction::EnableProvider("google".into()))
        );

        assert_eq!(AdminAction::from_query(&HashMap::new()), None);
    }

    #[test]
    fn sanity_google_provider_declares_required_credentials() {
        let provider = GoogleProvider::new();
        let settings = provider.user_settings();
        assert!(settings.iter().all(|s| s.required));
        assert_eq!(settings[0].key, "client_id");
    }
}
