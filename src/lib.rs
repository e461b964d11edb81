pub mod admin;
pub mod config;
pub mod error;
pub mod options;
pub mod providers;
pub mod store;

pub use config::Config;
pub use error::AdminError;

use std::sync::Arc;

use providers::ProviderRegistry;
use store::OptionsStore;

/// Shared application state passed to all admin handlers.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn OptionsStore>,
    pub registry: ProviderRegistry,
}

pub type SharedState = Arc<AppState>;
