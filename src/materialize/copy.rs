use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::GenerateError;

/// Directories never reproduced in a generated project, pruned at any depth:
/// dependency caches, version-control metadata, build output, local caches.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "dist",
    "build",
    ".cache",
    ".turbo",
    "coverage",
    ".vercel",
];

/// Counters from a template tree copy.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyStats {
    /// Regular files copied byte-for-byte
    pub files_copied: usize,
    /// Non-regular entries (sockets, dangling links) silently skipped
    pub entries_skipped: usize,
}

/// Recursively reproduce `src` under `dest`, pruning [`EXCLUDED_DIRS`].
///
/// Regular files are copied byte-for-byte. Non-regular entries are skipped
/// rather than failing the run; any other I/O error aborts the whole
/// operation with [`GenerateError::FileCopy`].
pub fn copy_template_tree(src: &Path, dest: &Path) -> Result<CopyStats, GenerateError> {
    let mut stats = CopyStats::default();

    let walker = WalkDir::new(src).into_iter().filter_entry(|entry| {
        let excluded = entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| EXCLUDED_DIRS.contains(&name));
        if excluded {
            tracing::debug!(path = %entry.path().display(), "pruning excluded directory");
        }
        !excluded
    });

    for entry in walker {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(src).to_path_buf();
            GenerateError::FileCopy {
                path,
                source: err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
            }
        })?;

        let rel = match entry.path().strip_prefix(src) {
            Ok(rel) if rel.as_os_str().is_empty() => continue, // the root itself
            Ok(rel) => rel.to_path_buf(),
            Err(_) => continue,
        };
        let target = dest.join(&rel);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|source| GenerateError::FileCopy {
                path: target.clone(),
                source,
            })?;
        } else if file_type.is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| GenerateError::FileCopy {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::copy(entry.path(), &target).map_err(|source| GenerateError::FileCopy {
                path: entry.path().to_path_buf(),
                source,
            })?;
            stats.files_copied += 1;
        } else {
            // Sockets, fifos, dangling symlinks: skipped, not fatal.
            tracing::debug!(path = %entry.path().display(), "skipping non-regular entry");
            stats.entries_skipped += 1;
        }
    }

    Ok(stats)
}
