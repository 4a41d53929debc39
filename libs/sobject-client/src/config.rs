//! Connection settings for a Salesforce organization

use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Production login endpoint; sandboxes use `https://test.salesforce.com`.
pub const DEFAULT_LOGIN_URL: &str = "https://login.salesforce.com";

/// REST API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "25.0";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Credentials and endpoint settings for the OAuth username/password flow.
#[derive(Clone)]
pub struct SalesforceConfig {
    /// Base URL of the OAuth endpoints
    pub login_url: String,
    /// Connected app consumer key
    pub client_id: String,
    /// Connected app consumer secret
    pub client_secret: String,
    /// Salesforce user name
    pub username: String,
    /// Password, with the security token appended when the org requires one
    pub password: String,
    /// REST API version, e.g. "25.0"
    pub api_version: String,
    /// Timeout applied to every HTTP request
    pub timeout: Duration,
}

impl SalesforceConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the login URL.
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    /// Set the REST API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that every credential is present and the API version looks like `NN.N`.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("client id", &self.client_id),
            ("client secret", &self.client_secret),
            ("user name", &self.username),
            ("password", &self.password),
            ("login url", &self.login_url),
        ];
        for (what, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("missing Salesforce {}", what)));
            }
        }

        let valid_version = self
            .api_version
            .split_once('.')
            .is_some_and(|(major, minor)| {
                !major.is_empty()
                    && !minor.is_empty()
                    && major.chars().all(|c| c.is_ascii_digit())
                    && minor.chars().all(|c| c.is_ascii_digit())
            });
        if !valid_version {
            return Err(Error::Config(format!(
                "invalid API version '{}', expected e.g. '25.0'",
                self.api_version
            )));
        }

        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".into()));
        }

        Ok(())
    }
}

impl fmt::Debug for SalesforceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SalesforceConfig")
            .field("login_url", &self.login_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}
