use super::traits::Provider;

/// Registry of available login providers.
///
/// Kept in registration order so the settings page renders the provider grid
/// deterministically. Lookups scan the list; the registry holds a handful of
/// entries at most.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Box<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Register a new provider. A duplicate id replaces the earlier entry.
    pub fn register(&mut self, provider: Box<dyn Provider>) {
        if let Some(existing) = self
            .providers
            .iter_mut()
            .find(|p| p.id() == provider.id())
        {
            *existing = provider;
        } else {
            self.providers.push(provider);
        }
    }

    /// Get a provider by id.
    pub fn get(&self, id: &str) -> Option<&dyn Provider> {
        self.providers
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.as_ref())
    }

    /// Iterate providers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Provider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    /// Number of registered providers.
    pub fn count(&self) -> usize {
        self.providers.len()
    }
}
