use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::{resolve_config, SiteConfig};
use crate::error::GenerateError;
use crate::identity::{write_env_file, SiteId};
use crate::materialize::{
    copy_template_tree, resolve_assets, substitute_tree, SubstitutionOptions,
};
use crate::provision::{AdminFields, CompanyFields, ProvisionOutcome, ProvisionStore};
use crate::tokens::compile_token_map;

/// Saved configuration filename at the generated project root.
const CONFIG_SNAPSHOT: &str = "site.config.json";

/// Everything a generation run needs besides the configuration document.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Base website template directory
    pub template_root: PathBuf,
    /// Root under which the project directory is created
    pub output_root: PathBuf,
    /// Optional directory of stock service images
    pub assets_root: Option<PathBuf>,
    /// Backend location written into the generated `.env`
    pub backend_url: String,
    /// Token substitution knobs (legacy grammar, strict mode)
    pub substitution: SubstitutionOptions,
    /// Store provisioning; `None` skips the store entirely
    pub provision: Option<ProvisionRequest>,
}

/// Store parameters for the provisioning step.
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    /// SQLite database file
    pub db_path: PathBuf,
    /// Admin account email; defaults to the company email when `None`
    pub admin_email: Option<String>,
    /// Plaintext admin credential, hashed before storage
    pub admin_password: String,
}

/// Summary of one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Final project directory
    pub project_dir: PathBuf,
    /// Identity minted for this site
    pub site_id: SiteId,
    /// The fully resolved configuration the site was generated from
    pub config: SiteConfig,
    pub files_copied: usize,
    pub files_modified: usize,
    /// Substitutions performed through the deprecated `__TOKEN__` grammar
    pub legacy_token_hits: usize,
    /// Placeholders left verbatim (non-strict mode)
    pub unresolved_tokens: Vec<String>,
    /// Image references that found no source file
    pub asset_misses: Vec<String>,
    /// Store outcome; `None` when provisioning was skipped
    pub provision: Option<ProvisionOutcome>,
}

/// Run the full generation pipeline for one user configuration document.
///
/// Filesystem-stage errors abort the run; the staging directory is removed
/// best-effort so failed runs do not accumulate partial trees. Provisioning
/// failures surface as [`GenerateError::Provisioning`] after the generated
/// files are already in place.
pub fn generate_site(
    user_config: &Value,
    options: &GenerateOptions,
) -> Result<GenerateReport, GenerateError> {
    let mut config = resolve_config(user_config)?;
    let slug = config.company.slug.clone();

    if !options.template_root.is_dir() {
        return Err(GenerateError::TemplateNotFound(
            options.template_root.clone(),
        ));
    }

    let category = if config.industry.slug.is_empty() {
        "general".to_string()
    } else {
        config.industry.slug.clone()
    };
    let final_dir = options.output_root.join(&category).join(&slug);
    if final_dir.exists() {
        return Err(GenerateError::DestinationExists(final_dir));
    }

    let site_id = SiteId::new();
    let staging = options
        .output_root
        .join(".staging")
        .join(format!("{slug}-{site_id}"));

    let result = materialize_into(&mut config, site_id, &staging, options);
    let (copy_stats, substitution, assets) = match result {
        Ok(parts) => parts,
        Err(err) => {
            // Best-effort cleanup; the error being reported is the real one.
            if let Err(cleanup) = fs::remove_dir_all(&staging) {
                tracing::debug!(error = %cleanup, "staging cleanup failed");
            }
            return Err(err);
        }
    };

    if let Some(parent) = final_dir.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::FileCopy {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    println!("📦 Moving staged project into place → {final_dir:?}");
    fs::rename(&staging, &final_dir).map_err(|source| {
        // A concurrent run may have claimed the slug between the check and
        // the rename; report that as the destination conflict it is.
        if final_dir.exists() {
            GenerateError::DestinationExists(final_dir.clone())
        } else {
            GenerateError::FileCopy {
                path: staging.clone(),
                source,
            }
        }
    })?;

    let provision = match &options.provision {
        Some(request) => Some(run_provisioning(&config, request)?),
        None => None,
    };

    Ok(GenerateReport {
        project_dir: final_dir,
        site_id,
        config,
        files_copied: copy_stats.files_copied,
        files_modified: substitution.files_modified,
        legacy_token_hits: substitution.legacy_hits,
        unresolved_tokens: substitution.unresolved.into_iter().collect(),
        asset_misses: assets.misses,
        provision,
    })
}

/// Filesystem stages, all against the staging directory.
fn materialize_into(
    config: &mut SiteConfig,
    site_id: SiteId,
    staging: &Path,
    options: &GenerateOptions,
) -> Result<
    (
        crate::materialize::CopyStats,
        crate::materialize::SubstitutionReport,
        crate::materialize::AssetReport,
    ),
    GenerateError,
> {
    fs::create_dir_all(staging).map_err(|source| GenerateError::FileCopy {
        path: staging.to_path_buf(),
        source,
    })?;

    println!("📁 Copying template tree from {:?}", options.template_root);
    let copy_stats = copy_template_tree(&options.template_root, staging)?;
    println!("✅ Copied {} files", copy_stats.files_copied);

    let assets = resolve_assets(config, options.assets_root.as_deref(), staging).map_err(
        |err| GenerateError::FileCopy {
            path: staging.to_path_buf(),
            source: std::io::Error::other(err.to_string()),
        },
    )?;
    if assets.copied > 0 {
        println!("🖼️  Resolved {} image assets", assets.copied);
    }

    let tokens = compile_token_map(config);
    let substitution = substitute_tree(staging, &tokens, &options.substitution)?;
    println!(
        "✅ Substituted tokens in {} of {} text files",
        substitution.files_modified, substitution.files_visited
    );

    rewrite_package_manifest(staging, &config.company.slug)?;
    write_env_file(staging, site_id, &options.backend_url).map_err(|source| {
        GenerateError::FileCopy {
            path: staging.join(".env"),
            source,
        }
    })?;

    let snapshot = serde_json::to_string_pretty(config)
        .map_err(|e| GenerateError::ConfigValidation(e.to_string()))?;
    fs::write(staging.join(CONFIG_SNAPSHOT), snapshot).map_err(|source| {
        GenerateError::FileCopy {
            path: staging.join(CONFIG_SNAPSHOT),
            source,
        }
    })?;

    Ok((copy_stats, substitution, assets))
}

/// Point the generated project's package manifest at the tenant: sets the
/// `name` field of `package.json` to the slug, leaving everything else
/// untouched. A template without a manifest is fine.
fn rewrite_package_manifest(project_root: &Path, slug: &str) -> Result<(), GenerateError> {
    let manifest_path = project_root.join("package.json");
    if !manifest_path.is_file() {
        return Ok(());
    }
    let io_err = |source| GenerateError::FileCopy {
        path: manifest_path.clone(),
        source,
    };

    let content = fs::read_to_string(&manifest_path).map_err(io_err)?;
    let mut manifest: Value = serde_json::from_str(&content)
        .map_err(|e| GenerateError::ConfigValidation(format!("invalid package.json: {e}")))?;
    if let Some(obj) = manifest.as_object_mut() {
        obj.insert("name".to_string(), Value::String(slug.to_string()));
    }
    let rewritten = serde_json::to_string_pretty(&manifest)
        .map_err(|e| GenerateError::ConfigValidation(e.to_string()))?;
    fs::write(&manifest_path, rewritten + "\n").map_err(io_err)?;
    Ok(())
}

/// Store steps, run after the filesystem stages succeed.
fn run_provisioning(
    config: &SiteConfig,
    request: &ProvisionRequest,
) -> Result<ProvisionOutcome, GenerateError> {
    let company = CompanyFields::from_config(config);
    let admin = AdminFields {
        email: request
            .admin_email
            .clone()
            .unwrap_or_else(|| config.company.email.clone()),
        password: request.admin_password.clone(),
    };
    let mut store = ProvisionStore::open(&request.db_path)?;
    Ok(store.provision(&company, &admin)?)
}
