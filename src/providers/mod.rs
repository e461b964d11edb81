mod facebook;
mod google;
mod registry;
mod traits;
mod twitter;
mod wordpress;

pub use facebook::FacebookProvider;
pub use google::GoogleProvider;
pub use registry::ProviderRegistry;
pub use traits::{InputType, Provider, ProviderStatus, SettingField};
pub use twitter::TwitterProvider;
pub use wordpress::WordPressProvider;

/// Register the default set of login providers.
pub fn register_defaults(registry: &mut ProviderRegistry) {
    registry.register(Box::new(FacebookProvider::new()));
    registry.register(Box::new(GoogleProvider::new()));
    registry.register(Box::new(TwitterProvider::new()));
    registry.register(Box::new(WordPressProvider::new()));
}
