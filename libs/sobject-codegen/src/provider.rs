use crate::error::{Error, Result};
use async_trait::async_trait;
use sfgen_models::{Catalog, SObjectDescription};

/// Source of SObject metadata
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Acquire whatever session the provider needs.
    async fn open(&self) -> Result<()> {
        Ok(())
    }

    async fn fetch_catalog(&self) -> Result<Catalog>;

    async fn fetch_description(&self, name: &str) -> Result<SObjectDescription>;

    /// Release the session. Called on every exit path once `open` succeeded.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(feature = "salesforce")]
#[async_trait]
impl MetadataProvider for sfgen_client::SalesforceClient {
    async fn open(&self) -> Result<()> {
        tracing::info!("Salesforce login...");
        self.login()
            .await
            .map_err(|e| provider_error("Salesforce login error", e))
    }

    async fn fetch_catalog(&self) -> Result<Catalog> {
        self.global_objects()
            .await
            .map(|objects| objects.catalog())
            .map_err(|e| provider_error("Error getting global objects", e))
    }

    async fn fetch_description(&self, name: &str) -> Result<SObjectDescription> {
        self.describe(name).await.map_err(|e| {
            provider_error(&format!("Error getting SObject description for {}", name), e)
        })
    }

    async fn close(&self) -> Result<()> {
        self.logout()
            .await
            .map_err(|e| provider_error("Salesforce logout error", e))
    }
}

#[cfg(feature = "salesforce")]
fn provider_error(context: &str, err: sfgen_client::Error) -> Error {
    Error::Provider(format!("{}: {}", context, err))
}
