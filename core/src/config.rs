//! Client configuration.

/// Endpoint for open-source repositories.
pub const DEFAULT_BASE_URL: &str = "https://api.travis-ci.org";

/// Endpoint for private repositories.
pub const PRO_BASE_URL: &str = "https://api.travis-ci.com";

/// Media type selecting version 2 of the API.
pub const MEDIA_TYPE: &str = "application/vnd.travis-ci.2+json";

pub const DEFAULT_USER_AGENT: &str = concat!("travis-core/", env!("CARGO_PKG_VERSION"));

pub const ENV_API_URL: &str = "TRAVIS_API_URL";
pub const ENV_TOKEN: &str = "TRAVIS_TOKEN";

/// Where the client sends requests and how it identifies itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Defaults overridden by `TRAVIS_API_URL` and `TRAVIS_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`. Empty values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut config = Self::default();
        if let Some(url) = get(ENV_API_URL) {
            config.base_url = url;
        }
        config.token = get(ENV_TOKEN);
        config
    }
}
