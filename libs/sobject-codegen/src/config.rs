//! Options of one generation run

use crate::error::{Error, Result};
use crate::generators::GeneratorConfig;
use crate::selector::{ObjectSelector, SelectionFilters};
use std::path::PathBuf;
use std::time::Duration;

/// Default root of the generated sources
pub const DEFAULT_OUTPUT_DIR: &str = "generated-sources/salesforce";

/// Default bound on each metadata provider call, in seconds
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Which SObjects to generate
    pub filters: SelectionFilters,
    /// Package, base classes and file naming
    pub generator: GeneratorConfig,
    /// Root directory; sources land in `<output_dir>/<package as path>`
    pub output_dir: PathBuf,
    /// Directory with custom templates, built-in templates when `None`
    pub template_dir: Option<PathBuf>,
    /// Fixed timestamp for the generated headers, current time when `None`
    pub generated_at: Option<String>,
    /// Upper bound on every metadata provider call
    pub provider_timeout: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            filters: SelectionFilters::default(),
            generator: GeneratorConfig::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            template_dir: None,
            generated_at: None,
            provider_timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        }
    }
}

impl GenerationOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_filters(mut self, filters: SelectionFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.generator.package_name = package_name.into();
        self
    }

    pub fn with_generated_at(mut self, generated_at: impl Into<String>) -> Self {
        self.generated_at = Some(generated_at.into());
        self
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Validate everything that can be checked before contacting the provider.
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        ObjectSelector::new(&self.filters)?;

        if self.provider_timeout.is_zero() {
            return Err(Error::Configuration(
                "provider timeout must be greater than zero".into(),
            ));
        }
        if let Some(dir) = &self.template_dir {
            if !dir.is_dir() {
                return Err(Error::Configuration(format!(
                    "template directory {} does not exist",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}
