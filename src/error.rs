use std::fmt;
use std::path::PathBuf;

use crate::provision::ProvisionError;

/// Error taxonomy for a generation run.
///
/// Filesystem-stage variants are fatal to the whole run. `Provisioning` is
/// reported distinctly so a caller can tell "site files created, backing
/// records failed" apart from "nothing was created".
#[derive(Debug)]
pub enum GenerateError {
    /// A required identity field is missing after defaulting.
    ///
    /// Raised before any I/O. `company.slug` is both the destination
    /// directory name and the provisioning lookup key, so generation cannot
    /// proceed without it.
    ConfigValidation(String),
    /// The base template root does not exist. Raised before any I/O.
    TemplateNotFound(PathBuf),
    /// The target slug directory is already present. Raised before any
    /// copying; an existing destination is never overwritten.
    DestinationExists(PathBuf),
    /// Hard I/O failure during the tree copy. The run aborts, leaving a
    /// partial staging directory behind.
    FileCopy {
        /// Path that failed to copy
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Strict token mode only: placeholders that no Token Map entry
    /// resolves, sorted by name.
    UnresolvedTokens(Vec<String>),
    /// The store sequence failed. Filesystem output is unaffected.
    Provisioning(ProvisionError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::ConfigValidation(msg) => {
                write!(f, "configuration validation failed: {msg}")
            }
            GenerateError::TemplateNotFound(path) => {
                write!(f, "template root not found: {}", path.display())
            }
            GenerateError::DestinationExists(path) => {
                write!(
                    f,
                    "destination already exists: {} (refusing to overwrite)",
                    path.display()
                )
            }
            GenerateError::FileCopy { path, source } => {
                write!(f, "failed to copy {}: {source}", path.display())
            }
            GenerateError::UnresolvedTokens(names) => {
                write!(f, "unresolved template tokens: {}", names.join(", "))
            }
            GenerateError::Provisioning(err) => {
                write!(f, "provisioning failed: {err}")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::FileCopy { source, .. } => Some(source),
            GenerateError::Provisioning(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProvisionError> for GenerateError {
    fn from(err: ProvisionError) -> Self {
        GenerateError::Provisioning(err)
    }
}
