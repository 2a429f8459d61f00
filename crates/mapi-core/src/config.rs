//! Configuration management for the merchant API client.
//!
//! All configuration is driven by environment variables.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which authentication strategy the client should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    /// No authentication.
    #[default]
    Open,
    /// Shared secret sent in the `Authorization` header.
    Secret,
    /// RSA-SHA256 canonical request signing.
    Rsa,
}

impl AuthMethod {
    /// Lowercase name as used in `MAPI_AUTH`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Secret => "secret",
            Self::Rsa => "rsa",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" | "none" => Ok(Self::Open),
            "secret" => Ok(Self::Secret),
            "rsa" | "rsa-sha256" => Ok(Self::Rsa),
            _ => Err(ConfigError::UnknownAuthMethod(s.to_owned())),
        }
    }
}

/// Client configuration.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapiConfig {
    /// API root URL; request paths are joined onto it.
    pub base_url: String,
    /// Merchant ID sent as `X-Mcash-Merchant`.
    pub merchant_id: String,
    /// Merchant user ID sent as `X-Mcash-User`.
    pub user_id: String,
    /// Authentication strategy.
    pub auth: AuthMethod,
    /// Shared secret for [`AuthMethod::Secret`].
    #[serde(skip_serializing)]
    pub secret: Option<String>,
    /// Path to the PEM or DER private key for [`AuthMethod::Rsa`].
    pub private_key_path: Option<String>,
    /// Log level.
    pub log_level: String,
}

impl fmt::Debug for MapiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapiConfig")
            .field("base_url", &self.base_url)
            .field("merchant_id", &self.merchant_id)
            .field("user_id", &self.user_id)
            .field("auth", &self.auth)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("private_key_path", &self.private_key_path)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for MapiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mca.sh/merchant/v1/".to_owned(),
            merchant_id: String::new(),
            user_id: String::new(),
            auth: AuthMethod::Open,
            secret: None,
            private_key_path: None,
            log_level: "info".to_owned(),
        }
    }
}

impl MapiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// See [`MapiConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownAuthMethod`] for an unrecognized
    /// `MAPI_AUTH`, or [`ConfigError::Missing`] when the selected auth method
    /// lacks its secret or key path.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("MAPI_BASE_URL") {
            config.base_url = v;
        }
        if let Some(v) = lookup("MAPI_MERCHANT_ID") {
            config.merchant_id = v;
        }
        if let Some(v) = lookup("MAPI_USER_ID") {
            config.user_id = v;
        }
        if let Some(v) = lookup("MAPI_AUTH") {
            config.auth = v.parse()?;
        }
        config.secret = lookup("MAPI_SECRET").filter(|v| !v.is_empty());
        config.private_key_path = lookup("MAPI_PRIVATE_KEY_PATH").filter(|v| !v.is_empty());
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        match config.auth {
            AuthMethod::Secret if config.secret.is_none() => {
                return Err(ConfigError::Missing("MAPI_SECRET"));
            }
            AuthMethod::Rsa if config.private_key_path.is_none() => {
                return Err(ConfigError::Missing("MAPI_PRIVATE_KEY_PATH"));
            }
            _ => {}
        }

        tracing::debug!(
            base_url = %config.base_url,
            auth = %config.auth,
            "loaded merchant API configuration"
        );

        Ok(config)
    }
}
