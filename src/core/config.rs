use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.a2rev.com";

/// Default `User-Agent` header value
pub const DEFAULT_USER_AGENT: &str = "A2reviews";

/// Environment variable holding the site API key
pub const API_KEY_ENV: &str = "A2REV_SITE_API_KEY";

/// Environment variable holding the site API secret
pub const API_SECRET_ENV: &str = "A2REV_SITE_API_SECRET";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

const fn default_http_errors() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: Secret<String>,
    pub api_secret: Secret<String>,
    pub base_url: String,
    pub user_agent: String,
    /// Request timeout in seconds, `None` leaves the HTTP client default
    pub timeout_seconds: Option<u64>,
    /// Treat 4xx/5xx replies as transport errors
    pub http_errors: bool,
}

// Never expose secrets in serialization
impl Serialize for ClientConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ClientConfig", 6)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("api_secret", "[REDACTED]")?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("user_agent", &self.user_agent)?;
        state.serialize_field("timeout_seconds", &self.timeout_seconds)?;
        state.serialize_field("http_errors", &self.http_errors)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ClientConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ClientConfigHelper {
            api_key: String,
            api_secret: String,
            #[serde(default = "default_base_url")]
            base_url: String,
            #[serde(default = "default_user_agent")]
            user_agent: String,
            #[serde(default)]
            timeout_seconds: Option<u64>,
            #[serde(default = "default_http_errors")]
            http_errors: bool,
        }

        let helper = ClientConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            api_key: Secret::new(helper.api_key),
            api_secret: Secret::new(helper.api_secret),
            base_url: helper.base_url,
            user_agent: helper.user_agent,
            timeout_seconds: helper.timeout_seconds,
            http_errors: helper.http_errors,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl ClientConfig {
    /// Create a new configuration with API credentials and default endpoint
    #[must_use]
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            api_secret: Secret::new(api_secret),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
            http_errors: true,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `A2REV_SITE_API_KEY`
    /// - `A2REV_SITE_API_SECRET`
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(API_KEY_ENV.to_string()))?;

        let api_secret = env::var(API_SECRET_ENV)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(API_SECRET_ENV.to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// Like [`ClientConfig::from_env`], but missing variables become empty
    /// credentials instead of an error.
    #[must_use]
    pub fn from_env_lenient() -> Self {
        Self::new(
            env::var(API_KEY_ENV).unwrap_or_default(),
            env::var(API_SECRET_ENV).unwrap_or_default(),
        )
    }

    /// Create configuration from a `.env` file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file() -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(".env")
    }

    /// Create configuration from a specific `.env` file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // no file, fall back to the process environment
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env()
    }

    /// Check if both API key and secret are set
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.api_secret.expose_secret().is_empty()
    }

    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    #[must_use]
    pub const fn http_errors(mut self, http_errors: bool) -> Self {
        self.http_errors = http_errors;
        self
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get API secret (use carefully - exposes secret)
    pub fn api_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_redacts_secrets() {
        let config = ClientConfig::new("key".to_string(), "very-secret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("[REDACTED]"));
        assert!(!json.contains("very-secret"));
        assert!(json.contains(DEFAULT_BASE_URL));
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_key":"k","api_secret":"s"}"#).unwrap();
        assert_eq!(config.api_key(), "k");
        assert_eq!(config.api_secret(), "s");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.http_errors);
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn test_has_credentials() {
        assert!(ClientConfig::new("k".to_string(), "s".to_string()).has_credentials());
        assert!(!ClientConfig::new("k".to_string(), String::new()).has_credentials());
        assert!(!ClientConfig::default().has_credentials());
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = ClientConfig::new("k".to_string(), "very-secret".to_string());
        assert!(!format!("{:?}", config).contains("very-secret"));
    }
}
