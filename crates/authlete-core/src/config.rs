//! Client-side configuration for the Authlete API.
//!
//! Configuration is loaded from environment variables (optionally via a `.env`
//! file) or deserialized from any serde source the caller prefers.

use std::fmt;
use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Default location of the Authlete API.
pub const DEFAULT_BASE_URL: &str = "https://api.authlete.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings a caller-side HTTP client needs to reach the Authlete API.
///
/// Service credentials authenticate the `/api/auth/*`, `/api/device/*`,
/// `/api/backchannel/*` and `/api/client/*` families. Service-owner
/// credentials are only needed for `/api/service/*`.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthleteConfig {
    /// Base URL of the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key of the service.
    pub service_api_key: String,

    /// API secret of the service.
    pub service_api_secret: String,

    /// API key of the service owner.
    #[serde(default)]
    pub service_owner_api_key: Option<String>,

    /// API secret of the service owner.
    #[serde(default)]
    pub service_owner_api_secret: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl fmt::Debug for AuthleteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthleteConfig")
            .field("base_url", &self.base_url)
            .field("service_api_key", &self.service_api_key)
            .field("service_api_secret", &"[REDACTED]")
            .field("service_owner_api_key", &self.service_owner_api_key)
            .field(
                "service_owner_api_secret",
                &self.service_owner_api_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AuthleteConfig {
    /// Creates a configuration for the default base URL.
    #[must_use]
    pub fn new(service_api_key: impl Into<String>, service_api_secret: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            service_api_key: service_api_key.into(),
            service_api_secret: service_api_secret.into(),
            service_owner_api_key: None,
            service_owner_api_secret: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// | Variable | Required |
    /// |---|---|
    /// | `AUTHLETE_BASE_URL` | no |
    /// | `AUTHLETE_SERVICE_APIKEY` | yes |
    /// | `AUTHLETE_SERVICE_APISECRET` | yes |
    /// | `AUTHLETE_SERVICEOWNER_APIKEY` | no |
    /// | `AUTHLETE_SERVICEOWNER_APISECRET` | no |
    /// | `AUTHLETE_TIMEOUT_SECS` | no |
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value does not
    /// parse.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AuthleteConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = non_empty("AUTHLETE_BASE_URL").unwrap_or_else(default_base_url);
        Url::parse(&base_url)?;

        let service_api_key = non_empty("AUTHLETE_SERVICE_APIKEY")
            .ok_or_else(|| Error::missing("AUTHLETE_SERVICE_APIKEY"))?;
        let service_api_secret = non_empty("AUTHLETE_SERVICE_APISECRET")
            .ok_or_else(|| Error::missing("AUTHLETE_SERVICE_APISECRET"))?;

        let service_owner_api_key = non_empty("AUTHLETE_SERVICEOWNER_APIKEY");
        let service_owner_api_secret = non_empty("AUTHLETE_SERVICEOWNER_APISECRET");

        let timeout_secs = match non_empty("AUTHLETE_TIMEOUT_SECS") {
            Some(v) => v.trim().parse().map_err(|_| {
                Error::Config(format!("AUTHLETE_TIMEOUT_SECS is not a number: {v}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        debug!(base_url = %base_url, service_api_key = %service_api_key, "loaded Authlete configuration");

        Ok(Self {
            base_url,
            service_api_key,
            service_api_secret,
            service_owner_api_key,
            service_owner_api_secret,
            timeout_secs,
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the service owner credentials.
    #[must_use]
    pub fn with_service_owner(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.service_owner_api_key = Some(api_key.into());
        self.service_owner_api_secret = Some(api_secret.into());
        self
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolves an API path such as `/api/auth/token` against the base URL.
    ///
    /// A path prefix in the base URL is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid absolute URL.
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    /// `Authorization` header value for service-level APIs.
    #[must_use]
    pub fn service_authorization(&self) -> String {
        basic_authorization(&self.service_api_key, &self.service_api_secret)
    }

    /// `Authorization` header value for service-owner APIs.
    ///
    /// # Errors
    ///
    /// Returns an error if the service-owner credentials are not configured.
    pub fn service_owner_authorization(&self) -> Result<String> {
        match (&self.service_owner_api_key, &self.service_owner_api_secret) {
            (Some(key), Some(secret)) => Ok(basic_authorization(key, secret)),
            (None, _) => Err(Error::missing("AUTHLETE_SERVICEOWNER_APIKEY")),
            (_, None) => Err(Error::missing("AUTHLETE_SERVICEOWNER_APISECRET")),
        }
    }
}

fn basic_authorization(key: &str, secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{key}:{secret}")))
}
