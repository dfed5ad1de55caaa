use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_config_document, resolve_config};
use crate::error::GenerateError;
use crate::generator::{generate_site, GenerateOptions, GenerateReport, ProvisionRequest};
use crate::materialize::SubstitutionOptions;
use crate::provision::{AdminFields, CompanyFields, ProvisionStore};
use crate::runtime_config::RuntimeConfig;

/// Command-line interface for the site generator.
#[derive(Parser)]
#[command(name = "siteforge-gen")]
#[command(about = "Multi-tenant marketing site generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a site from a configuration document (or interactively)
    Generate {
        /// Path to the configuration document (JSON or YAML); omit to be
        /// prompted for every field
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Base website template directory
        #[arg(long)]
        template_root: Option<PathBuf>,

        /// Root directory for generated projects
        #[arg(long)]
        output_root: Option<PathBuf>,

        /// Directory of stock service images for asset resolution
        #[arg(long)]
        assets_root: Option<PathBuf>,

        /// SQLite database file for provisioning
        #[arg(long)]
        db: Option<PathBuf>,

        /// Backend URL written into the generated .env
        #[arg(long)]
        backend_url: Option<String>,

        /// Admin account email (defaults to the company email)
        #[arg(long)]
        admin_email: Option<String>,

        /// Admin account password
        #[arg(long, env = "SITEFORGE_ADMIN_PASSWORD")]
        admin_password: Option<String>,

        /// Fail the run when any template placeholder has no token entry
        #[arg(long, default_value_t = false)]
        strict_tokens: bool,

        /// Disable the deprecated __TOKEN__ placeholder grammar
        #[arg(long, default_value_t = false)]
        no_legacy_tokens: bool,

        /// Skip store provisioning entirely
        #[arg(long, default_value_t = false)]
        skip_provisioning: bool,
    },
    /// Resolve and validate a configuration document without generating
    Validate {
        /// Path to the configuration document (JSON or YAML)
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Provision store records from a configuration document
    Provision {
        /// Path to the configuration document (JSON or YAML)
        #[arg(short, long)]
        config: PathBuf,

        /// SQLite database file for provisioning
        #[arg(long)]
        db: Option<PathBuf>,

        /// Admin account email (defaults to the company email)
        #[arg(long)]
        admin_email: Option<String>,

        /// Admin account password
        #[arg(long, env = "SITEFORGE_ADMIN_PASSWORD")]
        admin_password: String,
    },
}

/// Execute the CLI command provided by the user.
///
/// # Errors
///
/// Returns an error if the configuration document cannot be loaded or
/// resolved, materialization fails, or provisioning fails. The binary maps
/// any error to a non-zero exit code.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let runtime = RuntimeConfig::from_env();

    match cli.command {
        Commands::Generate {
            config,
            template_root,
            output_root,
            assets_root,
            db,
            backend_url,
            admin_email,
            admin_password,
            strict_tokens,
            no_legacy_tokens,
            skip_provisioning,
        } => {
            let document = match &config {
                Some(path) => load_config_document(path)?,
                None => super::prompts::collect_config()?,
            };

            let provision = if skip_provisioning {
                None
            } else {
                let password = admin_password.ok_or_else(|| {
                    anyhow::anyhow!(
                        "admin password required for provisioning \
                         (--admin-password or SITEFORGE_ADMIN_PASSWORD); \
                         or pass --skip-provisioning"
                    )
                })?;
                Some(ProvisionRequest {
                    db_path: db.unwrap_or(runtime.db_path),
                    admin_email,
                    admin_password: password,
                })
            };

            let options = GenerateOptions {
                template_root: template_root.unwrap_or(runtime.template_root),
                output_root: output_root.unwrap_or(runtime.output_root),
                assets_root,
                backend_url: backend_url.unwrap_or(runtime.backend_url),
                substitution: SubstitutionOptions {
                    legacy_tokens: !no_legacy_tokens,
                    strict: strict_tokens,
                },
                provision,
            };

            let report = generate_site(&document, &options).map_err(describe_failure)?;
            print_report(&report);
            Ok(())
        }
        Commands::Validate { config } => {
            let document = load_config_document(&config)?;
            let resolved = resolve_config(&document).map_err(describe_failure)?;
            println!(
                "✅ Valid configuration: {} ({}), {} services",
                resolved.company.name,
                resolved.company.slug,
                resolved.services.len()
            );
            Ok(())
        }
        Commands::Provision {
            config,
            db,
            admin_email,
            admin_password,
        } => {
            let document = load_config_document(&config)?;
            let resolved = resolve_config(&document).map_err(describe_failure)?;
            let company = CompanyFields::from_config(&resolved);
            let admin = AdminFields {
                email: admin_email.unwrap_or_else(|| resolved.company.email.clone()),
                password: admin_password,
            };
            let mut store = ProvisionStore::open(&db.unwrap_or(runtime.db_path))
                .map_err(|e| describe_failure(GenerateError::Provisioning(e)))?;
            let outcome = store
                .provision(&company, &admin)
                .map_err(|e| describe_failure(GenerateError::Provisioning(e)))?;
            println!(
                "✅ Provisioned tenant {} (company {}, user {}, association {})",
                company.name,
                created_or_existing(outcome.company_created),
                created_or_existing(outcome.user_created),
                created_or_existing(outcome.association_created),
            );
            Ok(())
        }
    }
}

fn created_or_existing(created: bool) -> &'static str {
    if created {
        "created"
    } else {
        "existing"
    }
}

fn print_report(report: &GenerateReport) {
    println!("✅ Generated site → {:?}", report.project_dir);
    println!("   site id: {}", report.site_id);
    println!(
        "   files: {} copied, {} rewritten",
        report.files_copied, report.files_modified
    );
    if report.legacy_token_hits > 0 {
        println!(
            "⚠️  {} substitutions used the deprecated __TOKEN__ grammar",
            report.legacy_token_hits
        );
    }
    if !report.unresolved_tokens.is_empty() {
        println!(
            "⚠️  unresolved tokens left verbatim: {}",
            report.unresolved_tokens.join(", ")
        );
    }
    for miss in &report.asset_misses {
        println!("ℹ️  asset not found: {miss}");
    }
    match &report.provision {
        Some(outcome) => println!(
            "✅ Provisioned (company {}, user {}, association {})",
            created_or_existing(outcome.company_created),
            created_or_existing(outcome.user_created),
            created_or_existing(outcome.association_created),
        ),
        None => println!("ℹ️  provisioning skipped"),
    }
}

/// Wrap a domain error with the red summary line the binary prints.
fn describe_failure(err: GenerateError) -> anyhow::Error {
    let stage = match &err {
        GenerateError::ConfigValidation(_) => "configuration",
        GenerateError::TemplateNotFound(_) | GenerateError::DestinationExists(_) => "pre-flight",
        GenerateError::FileCopy { .. } | GenerateError::UnresolvedTokens(_) => "materialization",
        GenerateError::Provisioning(_) => "provisioning",
    };
    anyhow::Error::new(err).context(format!("{stage} stage failed"))
}
