//! End-to-end generation run: catalog, selection, descriptions, sources

use crate::config::GenerationOptions;
use crate::error::{Error, Result};
use crate::generators::renderer::{HandlebarsRenderer, TemplateRenderer};
use crate::generators::SObjectGenerator;
use crate::naming;
use crate::provider::MetadataProvider;
use crate::selector::ObjectSelector;
use crate::type_map::TypeMapper;
use crate::utils;
use sfgen_models::SObjectDescription;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of a successful run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Directory the sources were written to
    pub package_dir: PathBuf,
    /// Generated SObjects, in name order
    pub entities: Vec<String>,
    /// Every written file, in generation order
    pub files: Vec<PathBuf>,
}

/// Renderer for `options`: custom templates when a directory is set, the
/// built-in ones otherwise.
pub fn renderer_for(options: &GenerationOptions) -> Result<HandlebarsRenderer> {
    match &options.template_dir {
        Some(dir) => HandlebarsRenderer::from_dir(dir),
        None => HandlebarsRenderer::new(),
    }
}

/// Generate sources for the selected SObjects of `provider`.
///
/// The provider is opened before the first call and closed on every exit
/// path once opened; a failing close is logged and does not mask the result.
pub async fn generate<P>(
    provider: &P,
    renderer: &dyn TemplateRenderer,
    options: &GenerationOptions,
) -> Result<GenerationReport>
where
    P: MetadataProvider + ?Sized,
{
    options.validate()?;
    let selector = ObjectSelector::new(&options.filters)?;
    let types = TypeMapper::new();
    let timeout = options.provider_timeout;

    bounded(timeout, "opening metadata session", provider.open()).await?;

    let result = run(provider, renderer, options, &selector, &types).await;

    if let Err(e) = bounded(timeout, "closing metadata session", provider.close()).await {
        tracing::warn!(error = %e, "Error closing metadata session");
    }

    let report = result?;
    tracing::info!(
        "Successfully generated {} Java classes",
        report.files.len()
    );
    Ok(report)
}

async fn run<P>(
    provider: &P,
    renderer: &dyn TemplateRenderer,
    options: &GenerationOptions,
    selector: &ObjectSelector,
    types: &TypeMapper,
) -> Result<GenerationReport>
where
    P: MetadataProvider + ?Sized,
{
    let timeout = options.provider_timeout;

    tracing::info!("Getting Salesforce Objects...");
    let catalog = bounded(timeout, "fetching global objects", provider.fetch_catalog()).await?;
    let selected = selector.select(&catalog);

    tracing::info!("Retrieving Object descriptions...");
    let mut descriptions: Vec<SObjectDescription> = Vec::with_capacity(selected.len());
    for name in &selected {
        let what = format!("describing {}", name);
        let description = bounded(timeout, &what, provider.fetch_description(name)).await?;
        check_description(name, &description)?;
        descriptions.push(description);
    }

    let package_dir = utils::create_package_dir(&options.output_dir, &options.generator.package_name)?;
    tracing::info!(dir = %package_dir.display(), "Generating Java Classes...");

    let generated_at = options
        .generated_at
        .clone()
        .unwrap_or_else(current_timestamp);
    let generator = SObjectGenerator::new(&options.generator, types, renderer);

    let mut report = GenerationReport {
        package_dir,
        ..Default::default()
    };
    for description in &descriptions {
        let files = generator.generate(&report.package_dir, description, &generated_at)?;
        report.entities.push(description.name.clone());
        report.files.extend(files);
    }

    Ok(report)
}

/// Reject descriptions whose names cannot become Java identifiers and file stems.
///
/// Runs before anything is written, so a malformed payload leaves no output behind.
fn check_description(requested: &str, description: &SObjectDescription) -> Result<()> {
    if description.name != requested {
        return Err(Error::Provider(format!(
            "description of {} is named '{}'",
            requested, description.name
        )));
    }
    if !naming::is_java_identifier(&description.name) {
        return Err(Error::Provider(format!(
            "SObject name '{}' is not a valid identifier",
            description.name
        )));
    }
    for field in &description.fields {
        if !naming::is_java_identifier(&field.name) {
            return Err(Error::Provider(format!(
                "field name '{}' of {} is not a valid identifier",
                field.name, description.name
            )));
        }
    }
    Ok(())
}

/// Await `call`, turning expiry of `timeout` into a provider error.
async fn bounded<T, F>(timeout: Duration, what: &str, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(Error::Provider(format!(
            "timed out after {}s {}",
            timeout.as_secs_f64(),
            what
        ))),
    }
}

fn current_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
