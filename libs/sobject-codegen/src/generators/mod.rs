//! Java source generation for SObject descriptions
//!
//! Each SObject yields its DTO class, one enum per picklist field, and a
//! `QueryRecords` wrapper. Artifacts of one SObject never reference another
//! SObject's artifacts, so descriptions can be generated in any order.

pub mod bindings;
pub mod renderer;

use crate::error::{Error, Result};
use crate::naming::{self, ArtifactKind, BaseFieldManifest};
use crate::type_map::TypeMapper;
use crate::utils;
use bindings::{
    Bindings, DescriptionBinding, EnumBindings, EnumFieldBinding, PojoBindings,
    QueryRecordsBindings,
};
use regex::Regex;
use renderer::TemplateRenderer;
use sfgen_models::SObjectDescription;
use std::path::{Path, PathBuf};

/// Package of the generated DTOs when none is configured
pub const DEFAULT_PACKAGE_NAME: &str = "org.apache.camel.salesforce.dto";
/// Package of the runtime `AbstractSObjectBase` / `AbstractQueryRecordsBase` classes
pub const DEFAULT_BASE_PACKAGE: &str = "org.apache.camel.component.salesforce.api.dto";
pub const JAVA_EXTENSION: &str = ".java";

const PACKAGE_NAME_PATTERN: &str = r"^[a-z]+(\.[a-z][a-z0-9]*)*$";

/// Configuration options for code generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Java package of the generated sources
    pub package_name: String,
    /// Java package of the runtime base classes
    pub base_package: String,
    /// Extension appended to every artifact file name
    pub file_extension: String,
    /// Fields the generated classes inherit
    pub base_fields: BaseFieldManifest,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            base_package: DEFAULT_BASE_PACKAGE.to_string(),
            file_extension: JAVA_EXTENSION.to_string(),
            base_fields: BaseFieldManifest::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check both package names against the package grammar.
    pub fn validate(&self) -> Result<()> {
        validate_package_name(&self.package_name)?;
        validate_package_name(&self.base_package)?;
        if self.file_extension.contains(['/', '\\']) {
            return Err(Error::Configuration(format!(
                "Invalid file extension {}",
                self.file_extension
            )));
        }
        Ok(())
    }
}

/// Validate a Java package name: lowercase-letter-led segments separated by `.`.
pub fn validate_package_name(name: &str) -> Result<()> {
    let pattern = Regex::new(PACKAGE_NAME_PATTERN)
        .map_err(|e| Error::Configuration(format!("package name pattern: {}", e)))?;
    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(Error::Configuration(format!("Invalid package name {}", name)))
    }
}

/// Emits the artifacts of one SObject at a time
pub struct SObjectGenerator<'a> {
    config: &'a GeneratorConfig,
    types: &'a TypeMapper,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> SObjectGenerator<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        types: &'a TypeMapper,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self {
            config,
            types,
            renderer,
        }
    }

    /// Write every artifact of `description` into `pkg_dir`.
    ///
    /// Returns the written paths in generation order: DTO class, picklist
    /// enums, query records wrapper. Stops at the first failure.
    pub fn generate(
        &self,
        pkg_dir: &Path,
        description: &SObjectDescription,
        generated_at: &str,
    ) -> Result<Vec<PathBuf>> {
        let desc = DescriptionBinding::build(description, self.types, &self.config.base_fields)?;
        let entity = description.name.as_str();
        let mut written = Vec::new();

        let pojo = PojoBindings {
            package_name: &self.config.package_name,
            base_package: &self.config.base_package,
            generated_at,
            description: &desc,
        };
        written.push(self.emit(pkg_dir, ArtifactKind::Pojo { entity }, &Bindings::Pojo(&pojo))?);

        for field in description.enumerated_fields() {
            let field_binding = EnumFieldBinding::build(field);
            let data = EnumBindings {
                package_name: &self.config.package_name,
                generated_at,
                field: &field_binding,
            };
            written.push(self.emit(
                pkg_dir,
                ArtifactKind::Enum { field: &field.name },
                &Bindings::Enum(&data),
            )?);
        }

        let query = QueryRecordsBindings {
            package_name: &self.config.package_name,
            base_package: &self.config.base_package,
            generated_at,
            description: &desc,
        };
        written.push(self.emit(
            pkg_dir,
            ArtifactKind::QueryRecords { entity },
            &Bindings::QueryRecords(&query),
        )?);

        tracing::debug!(sobject = entity, artifacts = written.len(), "Generated SObject");
        Ok(written)
    }

    fn emit(&self, pkg_dir: &Path, kind: ArtifactKind<'_>, bindings: &Bindings<'_>) -> Result<PathBuf> {
        let file_name = format!(
            "{}{}",
            naming::artifact_file_name(kind),
            self.config.file_extension
        );
        let contents = self.renderer.render(bindings)?;
        let path = pkg_dir.join(file_name);
        utils::write_artifact(&path, &contents)?;
        Ok(path)
    }
}
