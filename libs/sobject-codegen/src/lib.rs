//! SObject Code Generator
//!
//! This library generates Java DTO sources from Salesforce SObject metadata.
//!
//! ## Architecture
//!
//! A run goes through four stages:
//! 1. **Provider**: fetches the catalog of SObject names and their descriptions
//! 2. **Selector**: narrows the catalog with include/exclude names and patterns
//! 3. **Bindings**: maps every field to a Java type and every picklist to an enum
//! 4. **Renderer**: renders the DTO, picklist enum and `QueryRecords` templates
//!
//! The provider is a trait, so generation can run against the Salesforce REST
//! API (the default `salesforce` feature) or any other metadata source.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sfgen_client::SalesforceConfig;
//! use sfgen_codegen::{generate_from_salesforce, GenerationOptions, SelectionFilters};
//!
//! # async fn example() -> Result<(), sfgen_codegen::Error> {
//! let config = SalesforceConfig::new("client-id", "client-secret", "user@example.com", "password");
//! let options = GenerationOptions::new("target/generated-sources")
//!     .with_package_name("com.acme.dto")
//!     .with_filters(SelectionFilters {
//!         include_names: vec!["Account".into(), "Contact".into()],
//!         ..Default::default()
//!     });
//!
//! let report = generate_from_salesforce(config, &options).await?;
//! println!("{} files in {}", report.files.len(), report.package_dir.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod naming;
pub mod pipeline;
pub mod provider;
pub mod selector;
pub mod type_map;
pub mod utils;

pub use config::GenerationOptions;
pub use error::{Error, Result};
pub use generators::renderer::{HandlebarsRenderer, TemplateRenderer};
pub use generators::{GeneratorConfig, SObjectGenerator};
pub use naming::{enum_constant_name, enum_type_name, BaseFieldManifest};
pub use pipeline::{generate, renderer_for, GenerationReport};
pub use provider::MetadataProvider;
pub use selector::{ObjectSelector, SelectionFilters};
pub use type_map::TypeMapper;

/// Run a full generation against a Salesforce organization.
///
/// Options and templates are checked before the client logs in.
#[cfg(feature = "salesforce")]
pub async fn generate_from_salesforce(
    config: sfgen_client::SalesforceConfig,
    options: &GenerationOptions,
) -> Result<GenerationReport> {
    options.validate()?;
    let renderer = renderer_for(options)?;

    let client = sfgen_client::SalesforceClient::new(config).map_err(|e| match e {
        sfgen_client::Error::Config(message) => Error::Configuration(message),
        other => Error::Provider(other.to_string()),
    })?;

    generate(&client, &renderer, options).await
}
