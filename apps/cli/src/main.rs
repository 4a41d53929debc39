//! sfgen: generate Java DTOs from Salesforce SObject metadata
//!
//! Usage:
//!   sfgen --client-id <id> --client-secret <secret> --username <user> --password <pass> \
//!         --include Account,Contact --package-name com.acme.dto
//!
//! Every credential can also come from the environment (or a `.env` file):
//! `SALESFORCE_CLIENT_ID`, `SALESFORCE_CLIENT_SECRET`, `SALESFORCE_USERNAME`,
//! `SALESFORCE_PASSWORD`.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use sfgen_client::{SalesforceConfig, DEFAULT_API_VERSION, DEFAULT_LOGIN_URL};
use sfgen_codegen::config::{DEFAULT_OUTPUT_DIR, DEFAULT_PROVIDER_TIMEOUT_SECS};
use sfgen_codegen::generators::{DEFAULT_BASE_PACKAGE, DEFAULT_PACKAGE_NAME};
use sfgen_codegen::{BaseFieldManifest, GenerationOptions, SelectionFilters};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sfgen")]
#[command(version, about = "Generate Java DTOs from Salesforce SObject metadata")]
struct Args {
    /// Connected app consumer key
    #[arg(long, env = "SALESFORCE_CLIENT_ID")]
    client_id: String,

    /// Connected app consumer secret
    #[arg(long, env = "SALESFORCE_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Salesforce user name
    #[arg(long, env = "SALESFORCE_USERNAME")]
    username: String,

    /// Salesforce password, with the security token appended if required
    #[arg(long, env = "SALESFORCE_PASSWORD", hide_env_values = true)]
    password: String,

    /// OAuth login endpoint
    #[arg(long, env = "SALESFORCE_LOGIN_URL", default_value = DEFAULT_LOGIN_URL)]
    login_url: String,

    /// REST API version
    #[arg(long, env = "SALESFORCE_API_VERSION", default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// Root directory of the generated sources
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Java package of the generated DTOs
    #[arg(short, long, default_value = DEFAULT_PACKAGE_NAME)]
    package_name: String,

    /// Java package of AbstractSObjectBase and AbstractQueryRecordsBase
    #[arg(long, default_value = DEFAULT_BASE_PACKAGE)]
    base_package: String,

    /// SObject names to generate
    #[arg(short, long, value_delimiter = ',')]
    include: Vec<String>,

    /// SObject names to skip
    #[arg(short, long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Regular expression of SObject names to generate
    #[arg(long)]
    include_pattern: Option<String>,

    /// Regular expression of SObject names to skip
    #[arg(long)]
    exclude_pattern: Option<String>,

    /// Directory with custom sobject-pojo / sobject-picklist / sobject-query-records templates
    #[arg(long)]
    template_dir: Option<PathBuf>,

    /// JSON manifest of the fields inherited from the base class
    #[arg(long)]
    base_fields: Option<PathBuf>,

    /// Fixed timestamp for the generated headers
    #[arg(long)]
    generated_at: Option<String>,

    /// Timeout for each Salesforce call, in seconds
    #[arg(long, default_value_t = DEFAULT_PROVIDER_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON log lines
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn salesforce_config(&self) -> SalesforceConfig {
        SalesforceConfig::new(
            &self.client_id,
            &self.client_secret,
            &self.username,
            &self.password,
        )
        .with_login_url(&self.login_url)
        .with_api_version(&self.api_version)
        .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    fn generation_options(&self) -> Result<GenerationOptions> {
        let mut options = GenerationOptions::new(&self.output_dir)
            .with_package_name(&self.package_name)
            .with_provider_timeout(Duration::from_secs(self.timeout_secs))
            .with_filters(SelectionFilters {
                include_names: self.include.clone(),
                exclude_names: self.exclude.clone(),
                include_pattern: self.include_pattern.clone(),
                exclude_pattern: self.exclude_pattern.clone(),
            });
        options.generator.base_package = self.base_package.clone();
        options.template_dir = self.template_dir.clone();
        options.generated_at = self.generated_at.clone();

        if let Some(path) = &self.base_fields {
            options.generator.base_fields = BaseFieldManifest::from_file(path)
                .with_context(|| format!("loading base field manifest {}", path.display()))?;
        }

        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    logging::init_logging(args.verbose, args.json_logs)?;

    let options = args.generation_options()?;
    let report = sfgen_codegen::generate_from_salesforce(args.salesforce_config(), &options)
        .await
        .context("generating SObject DTOs")?;

    info!(
        entities = report.entities.len(),
        dir = %report.package_dir.display(),
        "Done"
    );
    Ok(())
}
