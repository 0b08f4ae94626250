/// The root of version 1 of TheDogAPI.
pub const DEFAULT_BASE_URL: &str = "https://api.thedogapi.com/v1";

/// The header TheDogAPI reads the API key from.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Where to send requests and which key to send with them.
///
/// The [`Default`] configuration points at [`DEFAULT_BASE_URL`] and uses the key baked in at build
/// time through the `DOG_API_KEY` environment variable. When the variable is not set the key is
/// empty; the API still answers most breed queries without one.
///
/// ```rust
/// # use dog_api::ApiConfig;
/// let config = ApiConfig::default()
///     .with_base_url("http://localhost:3000/v1/")
///     .with_api_key("test-api-key");
///
/// assert_eq!(config.base_url(), "http://localhost:3000/v1");
/// assert_eq!(config.api_key(), "test-api-key");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: option_env!("DOG_API_KEY").unwrap_or_default().to_string(),
        }
    }
}

impl ApiConfig {
    /// Use a different API root. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Use a different API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// The API root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The key sent in the [`API_KEY_HEADER`] header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether a key is configured at all.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
