//! Admin route handlers. All handlers receive `SharedState` via Axum state
//! extraction and return the controller's discriminated response.

use std::collections::HashMap;

use axum::{
    extract::{Form, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::actions::{self, AdminAction, AdminResponse};
use super::notices::compute_notices;
use super::page;
use super::{PARAM_ALERT, PARAM_ALERT_TYPE, PARAM_PROVIDER_SETTINGS, SETTINGS_PATH};
use crate::error::AdminError;
use crate::options::load_display_options;
use crate::providers::ProviderStatus;
use crate::store::provider_options;
use crate::SharedState;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route(SETTINGS_PATH, get(settings_page).post(settings_submit))
        .route("/admin/quick-login/action-links", get(plugin_action_links))
        .with_state(state)
}

/// GET settings page: enable/disable links act and redirect, everything else
/// renders.
async fn settings_page(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<AdminResponse, AdminError> {
    if let Some(action) = AdminAction::from_query(&query) {
        return actions::handle(
            &state.registry,
            state.store.as_ref(),
            &state.config.settings_url(),
            action,
        )
        .await;
    }

    render(&state, &query).await
}

/// POST settings page: provider-settings and display-options forms. A
/// submission with no recognized marker is a no-op and falls through to
/// rendering.
async fn settings_submit(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<AdminResponse, AdminError> {
    match AdminAction::from_post(&query, &form)? {
        Some(action) => {
            actions::handle(
                &state.registry,
                state.store.as_ref(),
                &state.config.settings_url(),
                action,
            )
            .await
        }
        None => render(&state, &query).await,
    }
}

/// GET /admin/quick-login/action-links — the links contributed to the host's
/// plugin listing entry.
async fn plugin_action_links() -> Json<serde_json::Value> {
    Json(json!({ "data": page::action_links(&[]) }))
}

async fn render(
    state: &SharedState,
    query: &HashMap<String, String>,
) -> Result<AdminResponse, AdminError> {
    let views = page::provider_views(&state.registry, state.store.as_ref()).await?;
    let enabled = views
        .iter()
        .filter(|v| v.status == ProviderStatus::Enabled)
        .count();
    let notices = compute_notices(
        enabled,
        &state.config.settings_url(),
        query.get(PARAM_ALERT).map(String::as_str),
        query.get(PARAM_ALERT_TYPE).map(String::as_str),
    );

    // View switch: an unknown provider id falls through to the overview.
    if let Some(id) = query.get(PARAM_PROVIDER_SETTINGS) {
        if let Some(provider) = state.registry.get(id) {
            let bag = provider_options(state.store.as_ref(), id).await?;
            return Ok(AdminResponse::Page(page::render_setup(
                provider, &bag, &notices,
            )));
        }
    }

    let options = load_display_options(state.store.as_ref()).await?;
    Ok(AdminResponse::Page(page::render_overview(
        &views,
        options,
        &notices,
        &state.config.site_url,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{register_defaults, ProviderRegistry};
    use crate::store::MemoryStore;
    use crate::{AppState, Config};
    use std::sync::Arc;

    fn test_state() -> SharedState {
        let mut registry = ProviderRegistry::new();
        register_defaults(&mut registry);
        Arc::new(AppState {
            config: Config {
                host: "127.0.0.1".into(),
                port: 8430,
                base_url: "http://localhost:8430".into(),
                site_url: "https://example.com".into(),
                database_url: String::new(),
            },
            store: Arc::new(MemoryStore::new()),
            registry,
        })
    }

    #[tokio::test]
    async fn plain_get_renders_the_overview_with_the_health_warning() {
        let state = test_state();
        let response = render(&state, &HashMap::new()).await.unwrap();
        match response {
            AdminResponse::Page(html) => {
                assert!(html.contains("Enable login providers"));
                assert!(html.contains("no login providers are enabled"));
            }
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn provider_settings_query_switches_to_setup_mode() {
        let state = test_state();
        let query: HashMap<String, String> =
            [(PARAM_PROVIDER_SETTINGS.to_string(), "google".to_string())].into();
        let response = render(&state, &query).await.unwrap();
        match response {
            AdminResponse::Page(html) => assert!(html.contains("Set up Google")),
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_provider_id_falls_back_to_the_overview() {
        let state = test_state();
        let query: HashMap<String, String> =
            [(PARAM_PROVIDER_SETTINGS.to_string(), "myspace".to_string())].into();
        let response = render(&state, &query).await.unwrap();
        match response {
            AdminResponse::Page(html) => assert!(html.contains("Enable login providers")),
            other => panic!("expected page, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn alert_parameter_shows_on_the_redirect_target() {
        let state = test_state();
        let query: HashMap<String, String> = [
            (PARAM_ALERT.to_string(), "Google is enabled!".to_string()),
        ]
        .into();
        let response = render(&state, &query).await.unwrap();
        match response {
            AdminResponse::Page(html) => {
                assert!(html.contains("notice-success"));
                assert!(html.contains("Google is enabled!"));
            }
            other => panic!("expected page, got {other:?}"),
        }
    }
}
