use serde::{Deserialize, Serialize};

/// Default base URL for the hosted KYNEX platform.
pub const DEFAULT_BASE_URL: &str = "https://kynex.dev";

/// Configuration for the deployment artifact generator.
///
/// The only setting is the service base URL from which every generated
/// webhook URL and API endpoint is derived. The base URL is resolved once
/// at construction time; per-call URL building is pure concatenation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL of the KYNEX service, without a trailing slash.
    pub base_url: String,
}

impl GeneratorConfig {
    /// Creates a new generator configuration.
    ///
    /// Trailing slashes are stripped here so that URL assembly elsewhere
    /// never has to normalize.
    ///
    /// # Parameters
    ///
    /// * `base_url` - Base URL of the KYNEX service
    ///
    /// # Returns
    ///
    /// A new `GeneratorConfig` instance
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Sets a custom base URL.
    ///
    /// # Parameters
    ///
    /// * `base_url` - The custom base URL to use
    ///
    /// # Returns
    ///
    /// The updated `GeneratorConfig` instance for method chaining
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
