//! Salesforce REST Client
//!
//! This crate provides async access to the SObject metadata endpoints of a
//! Salesforce organization, authenticating with the OAuth 2.0 username/password
//! flow.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sfgen_client::{SalesforceClient, SalesforceConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SalesforceConfig::new("client-id", "client-secret", "user@example.com", "password");
//! let client = SalesforceClient::new(config)?;
//!
//! let objects = client.global_objects().await?;
//! for name in objects.catalog() {
//!     let desc = client.describe(&name).await?;
//!     println!("{}: {} fields", desc.name, desc.fields.len());
//! }
//!
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```
//!
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use client::SalesforceClient;
pub use config::{SalesforceConfig, DEFAULT_API_VERSION, DEFAULT_LOGIN_URL};
pub use error::{Error, Result};
pub use models::ApiError;
pub use session::{SalesforceSession, SessionToken};

// Re-export sobject-models types for convenience
pub use sfgen_models::{Catalog, GlobalObjects, SObjectDescription};
