use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::config::SiteConfig;

/// Extensions tried, in order, for every image candidate.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "svg"];

/// Outcome of asset resolution. Misses are events, not errors: the run
/// continues and the corresponding references degrade gracefully.
#[derive(Debug, Default, Clone)]
pub struct AssetReport {
    /// Images copied into the generated project
    pub copied: usize,
    /// Human-readable descriptions of references that found no source file
    pub misses: Vec<String>,
}

/// Locate and relocate configured images into the generated project.
///
/// Logo and favicon are explicitly supplied local paths: an existing path is
/// copied into `public/` and the config reference rewritten to the new
/// relative path; a nonexistent path resets the field to empty so the
/// generated output never points at a missing asset.
///
/// Service images are resolved against `assets_root` through an ordered
/// candidate chain - `<industry>-<service>.<ext>` first, then
/// `<service>.<ext>`, each across [`IMAGE_EXTENSIONS`] - and the first hit
/// is copied into `public/images/services/`. No hit leaves the reference as
/// configured.
pub fn resolve_assets(
    config: &mut SiteConfig,
    assets_root: Option<&Path>,
    project_root: &Path,
) -> anyhow::Result<AssetReport> {
    let mut report = AssetReport::default();
    let images_dir = project_root.join("public").join("images");

    let logo = std::mem::take(&mut config.branding.logo);
    config.branding.logo = relocate_supplied(
        &logo,
        &images_dir,
        "logo",
        "/images",
        "logo",
        &mut report,
    )?;

    let favicon = std::mem::take(&mut config.branding.favicon);
    config.branding.favicon = relocate_supplied(
        &favicon,
        &project_root.join("public"),
        "favicon",
        "",
        "favicon",
        &mut report,
    )?;

    let service_dir = images_dir.join("services");
    let industry = config.industry.slug.clone();
    for service in &mut config.services {
        if service.slug.is_empty() {
            continue;
        }
        let Some(root) = assets_root else {
            break;
        };
        match find_service_image(root, &industry, &service.slug) {
            Some(source) => {
                let ext = source
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("png")
                    .to_ascii_lowercase();
                fs::create_dir_all(&service_dir).with_context(|| {
                    format!("failed to create {}", service_dir.display())
                })?;
                let file_name = format!("{}.{ext}", service.slug);
                fs::copy(&source, service_dir.join(&file_name)).with_context(|| {
                    format!("failed to copy service image {}", source.display())
                })?;
                service.image = format!("/images/services/{file_name}");
                report.copied += 1;
            }
            None => {
                // Left as configured; for services that usually means omitted.
                tracing::info!(service = %service.slug, "no image candidate found");
                report.misses.push(format!("service image: {}", service.slug));
            }
        }
    }

    Ok(report)
}

/// Copy an explicitly supplied local image into the project, returning the
/// rewritten reference. A missing source resets the reference to empty.
fn relocate_supplied(
    supplied: &str,
    dest_dir: &Path,
    dest_stem: &str,
    public_prefix: &str,
    label: &str,
    report: &mut AssetReport,
) -> anyhow::Result<String> {
    if supplied.is_empty() {
        return Ok(String::new());
    }
    let source = Path::new(supplied);
    if !source.is_file() {
        tracing::info!(path = %supplied, "supplied {label} path does not exist; clearing reference");
        report.misses.push(format!("{label}: {supplied}"));
        return Ok(String::new());
    }
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_ascii_lowercase();
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("failed to create {}", dest_dir.display()))?;
    let file_name = format!("{dest_stem}.{ext}");
    fs::copy(source, dest_dir.join(&file_name))
        .with_context(|| format!("failed to copy {label} from {}", source.display()))?;
    report.copied += 1;
    Ok(format!("{public_prefix}/{file_name}"))
}

/// Ordered candidate chain for a service image: industry-specific filename
/// first, then the generic service-slug filename.
fn find_service_image(assets_root: &Path, industry: &str, service_slug: &str) -> Option<std::path::PathBuf> {
    let stems = [format!("{industry}-{service_slug}"), service_slug.to_string()];
    for stem in &stems {
        for ext in IMAGE_EXTENSIONS {
            let candidate = assets_root.join(format!("{stem}.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
