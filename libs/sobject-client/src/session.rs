//! OAuth 2.0 username/password session

use crate::config::SalesforceConfig;
use crate::error::{Error, Result};
use crate::models::{OAuthError, TokenResponse};
use reqwest::Client;
use std::fmt;
use tokio::sync::RwLock;

/// Access token plus the instance the token is valid for.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub access_token: String,
    pub instance_url: String,
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("access_token", &"<redacted>")
            .field("instance_url", &self.instance_url)
            .finish()
    }
}

/// Holds the current access token and logs in on demand.
pub struct SalesforceSession {
    http: Client,
    config: SalesforceConfig,
    token: RwLock<Option<SessionToken>>,
}

impl SalesforceSession {
    pub fn new(http: Client, config: SalesforceConfig) -> Self {
        Self {
            http,
            config,
            token: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &SalesforceConfig {
        &self.config
    }

    /// Exchange the configured credentials for a fresh access token.
    pub async fn login(&self) -> Result<SessionToken> {
        let url = format!(
            "{}/services/oauth2/token",
            self.config.login_url.trim_end_matches('/')
        );
        tracing::debug!(login_url = %self.config.login_url, username = %self.config.username, "Salesforce login");

        let params = [
            ("grant_type", "password"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("username", self.config.username.as_str()),
            ("password", self.config.password.as_str()),
        ];

        let response = self
            .http
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::from_transport)?;

        if !status.is_success() {
            let reason = serde_json::from_slice::<OAuthError>(&body)
                .map(|e| e.to_string())
                .unwrap_or_else(|_| format!("login endpoint returned status {}", status));
            return Err(Error::Authentication(reason));
        }

        let token: TokenResponse = serde_json::from_slice(&body)?;
        let token = SessionToken {
            access_token: token.access_token,
            instance_url: token.instance_url.trim_end_matches('/').to_string(),
        };

        *self.token.write().await = Some(token.clone());
        tracing::info!(instance_url = %token.instance_url, "Salesforce login successful");

        Ok(token)
    }

    /// Current token, logging in first if there is none.
    pub async fn token(&self) -> Result<SessionToken> {
        if let Some(token) = self.token.read().await.as_ref() {
            return Ok(token.clone());
        }
        self.login().await
    }

    /// Drop `stale` if it is still the current token.
    pub async fn invalidate(&self, stale: &SessionToken) {
        let mut guard = self.token.write().await;
        if guard.as_ref() == Some(stale) {
            *guard = None;
        }
    }

    /// Whether a token is currently held
    pub async fn is_logged_in(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Revoke the current token. A session that never logged in is a no-op.
    pub async fn logout(&self) -> Result<()> {
        let Some(token) = self.token.write().await.take() else {
            return Ok(());
        };

        let url = format!(
            "{}/services/oauth2/revoke",
            self.config.login_url.trim_end_matches('/')
        );
        let response = self
            .http
            .post(&url)
            .form(&[("token", token.access_token.as_str())])
            .send()
            .await
            .map_err(Error::from_transport)?;

        if !response.status().is_success() {
            return Err(Error::Authentication(format!(
                "token revocation returned status {}",
                response.status()
            )));
        }

        tracing::debug!("Salesforce session revoked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_debug_redacts_access_token() {
        let token = SessionToken {
            access_token: "00Dxx!secret".into(),
            instance_url: "https://na1.salesforce.com".into(),
        };
        let rendered = format!("{:?}", token);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("na1.salesforce.com"));
    }

    #[tokio::test]
    async fn test_logout_without_login_is_noop() {
        let config = SalesforceConfig::new("id", "secret", "user", "pw")
            .with_login_url("http://127.0.0.1:9");
        let session = SalesforceSession::new(Client::new(), config);
        assert!(!session.is_logged_in().await);
        session.logout().await.unwrap();
    }
}
