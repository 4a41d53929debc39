//! Template rendering for generated Java sources

use crate::error::{Error, Result};
use crate::generators::bindings::Bindings;
use crate::naming;
use crate::type_map;
use handlebars::{handlebars_helper, no_escape, Handlebars};
use std::fs;
use std::path::Path;

/// Template of the SObject DTO class
pub const POJO_TEMPLATE: &str = "sobject-pojo";
/// Template of the picklist enums
pub const PICKLIST_TEMPLATE: &str = "sobject-picklist";
/// Template of the `QueryRecords` wrapper
pub const QUERY_RECORDS_TEMPLATE: &str = "sobject-query-records";

const TEMPLATE_EXTENSION: &str = "hbs";

const BUILTIN_TEMPLATES: [(&str, &str); 3] = [
    (POJO_TEMPLATE, include_str!("templates/sobject-pojo.hbs")),
    (PICKLIST_TEMPLATE, include_str!("templates/sobject-picklist.hbs")),
    (
        QUERY_RECORDS_TEMPLATE,
        include_str!("templates/sobject-query-records.hbs"),
    ),
];

/// Renders artifact bindings to source text
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, bindings: &Bindings<'_>) -> Result<String>;
}

handlebars_helper!(enum_type_name_helper: |field_name: str| naming::enum_type_name(field_name));
handlebars_helper!(enum_constant_name_helper: |value: str| naming::enum_constant_name(value));
handlebars_helper!(java_type_helper: |tag: str| type_map::java_type(tag).unwrap_or_default());

/// Handlebars-backed renderer.
///
/// Runs in strict mode, so a template referring to a binding that does not
/// exist fails instead of rendering an empty string. Output is not HTML-escaped.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Renderer with the built-in templates
    pub fn new() -> Result<Self> {
        Self::from_sources(
            BUILTIN_TEMPLATES
                .iter()
                .map(|(name, source)| (*name, source.to_string())),
        )
    }

    /// Renderer with templates loaded from `dir`.
    ///
    /// The directory must contain `sobject-pojo.hbs`, `sobject-picklist.hbs`
    /// and `sobject-query-records.hbs`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut sources = Vec::with_capacity(BUILTIN_TEMPLATES.len());
        for (name, _) in BUILTIN_TEMPLATES {
            let path = dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION));
            if !path.is_file() {
                return Err(Error::render(
                    name,
                    format!("template not found at {}", path.display()),
                ));
            }
            let source = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            sources.push((name, source));
        }
        tracing::debug!(dir = %dir.display(), "Loaded custom templates");
        Self::from_sources(sources)
    }

    fn from_sources<'a>(sources: impl IntoIterator<Item = (&'a str, String)>) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(no_escape);
        registry.register_helper("enum_type_name", Box::new(enum_type_name_helper));
        registry.register_helper("enum_constant_name", Box::new(enum_constant_name_helper));
        registry.register_helper("java_type", Box::new(java_type_helper));

        for (name, source) in sources {
            registry
                .register_template_string(name, source)
                .map_err(|e| Error::render(name, e))?;
        }

        for (name, _) in BUILTIN_TEMPLATES {
            if !registry.has_template(name) {
                return Err(Error::render(name, "template not registered"));
            }
        }

        Ok(Self { registry })
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, bindings: &Bindings<'_>) -> Result<String> {
        let (template, rendered) = match bindings {
            Bindings::Pojo(data) => (POJO_TEMPLATE, self.registry.render(POJO_TEMPLATE, data)),
            Bindings::Enum(data) => (
                PICKLIST_TEMPLATE,
                self.registry.render(PICKLIST_TEMPLATE, data),
            ),
            Bindings::QueryRecords(data) => (
                QUERY_RECORDS_TEMPLATE,
                self.registry.render(QUERY_RECORDS_TEMPLATE, data),
            ),
        };
        rendered.map_err(|e| Error::render(template, e))
    }
}
