//! Salesforce REST API client

use crate::config::SalesforceConfig;
use crate::error::{Error, Result};
use crate::models::{ApiError, GlobalObjects, SObjectDescription};
use crate::session::{SalesforceSession, SessionToken};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Client for the SObject metadata endpoints of one organization.
pub struct SalesforceClient {
    session: SalesforceSession,
    http: Client,
    api_version: String,
}

impl SalesforceClient {
    /// Create a client. No request is made until the first call.
    pub fn new(config: SalesforceConfig) -> Result<Self> {
        config.validate()?;
        let http = Client::builder().timeout(config.timeout).build()?;
        let api_version = config.api_version.clone();
        Ok(Self {
            session: SalesforceSession::new(http.clone(), config),
            http,
            api_version,
        })
    }

    pub fn session(&self) -> &SalesforceSession {
        &self.session
    }

    /// Log in eagerly so credential problems surface before any metadata call.
    pub async fn login(&self) -> Result<()> {
        self.session.login().await.map(|_| ())
    }

    /// Revoke the session token.
    pub async fn logout(&self) -> Result<()> {
        self.session.logout().await
    }

    /// Fetch the list of every SObject in the organization.
    pub async fn global_objects(&self) -> Result<GlobalObjects> {
        self.get_json("sobjects/").await
    }

    /// Fetch the full description of one SObject.
    pub async fn describe(&self, sobject_name: &str) -> Result<SObjectDescription> {
        let path = format!("sobjects/{}/describe/", urlencoding::encode(sobject_name));
        self.get_json(&path).await
    }

    /// GET a data API resource, retrying once with a fresh token on 401.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let token = self.session.token().await?;
        match self.send(&token, path).await {
            Err(Error::Api { status: 401, .. }) => {
                tracing::debug!(path, "Session rejected, logging in again");
                self.session.invalidate(&token).await;
                let token = self.session.login().await?;
                self.send(&token, path).await
            }
            other => other,
        }
    }

    async fn send<T: DeserializeOwned>(&self, token: &SessionToken, path: &str) -> Result<T> {
        let url = data_url(&token.instance_url, &self.api_version, path);
        tracing::debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::from_transport)?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Build `{instance}/services/data/v{version}/{path}`
fn data_url(instance_url: &str, api_version: &str, path: &str) -> String {
    format!(
        "{}/services/data/v{}/{}",
        instance_url.trim_end_matches('/'),
        api_version,
        path.trim_start_matches('/')
    )
}

fn api_error(status: StatusCode, body: &[u8]) -> Error {
    let errors: Vec<ApiError> = serde_json::from_slice(body).unwrap_or_default();
    Error::Api {
        status: status.as_u16(),
        errors,
    }
}
