use std::sync::Arc;

use arc_swap::ArcSwap;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful game assistant.";

/// The secret material every request needs: the Gemini API key and the fixed
/// system instruction. Immutable once built; reloading builds a new value and
/// swaps the whole thing in one step.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub system_prompt: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            // trim() prevents copy-paste errors with stray whitespace
            api_key: api_key.into().trim().to_string(),
            system_prompt: system_prompt.into(),
        }
    }
}

/// Shared, hot-reloadable credential slot. Readers take a cheap snapshot;
/// a reload replaces the pair atomically, so no in-flight request can ever
/// observe a half-updated key/prompt combination.
pub struct CredentialStore {
    inner: ArcSwap<Credentials>,
}

impl CredentialStore {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            inner: ArcSwap::from_pointee(credentials),
        }
    }

    /// Snapshot of the current credentials. Requests take one of these at
    /// dispatch time and hold it for their whole lifetime.
    pub fn current(&self) -> Arc<Credentials> {
        self.inner.load_full()
    }

    /// Atomically replace the credentials. In-flight requests keep the
    /// snapshot they already took; only later dispatches see the new value.
    pub fn replace(&self, credentials: Credentials) {
        self.inner.store(Arc::new(credentials));
        tracing::info!("Credentials reloaded");
    }
}
