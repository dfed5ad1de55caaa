//! # Provisioning Service
//!
//! Idempotently creates or updates the backing records that make a generated
//! site operable: the tenant company, the admin account, and their
//! association.
//!
//! All three steps run inside a single transaction, so a mid-sequence
//! failure rolls back wholly - a company row can never be left orphaned
//! without its admin or association. Re-running provisioning with identical
//! inputs never creates a second company, a second user, or a duplicate
//! association; an existing user's role list is unioned with the admin
//! role, never replaced. Nothing in this module ever deletes a row.
//!
//! The store is a SQLite database file; the schema is applied idempotently
//! on open.

mod password;
mod store;


pub use password::{hash_password, verify_password};
pub use store::{AdminFields, CompanyFields, ProvisionOutcome, ProvisionStore, ADMIN_ROLE};

use std::fmt;

/// Failure in the provisioning sequence.
///
/// Surfaced distinctly from filesystem errors so a caller can tell "site
/// files created, backing records failed" apart from "nothing was created".
#[derive(Debug)]
pub enum ProvisionError {
    /// Relational store failure (open, schema, or any of the three steps)
    Store(rusqlite::Error),
    /// Credential hashing failure
    Hash(String),
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionError::Store(err) => write!(f, "store error: {err}"),
            ProvisionError::Hash(msg) => write!(f, "credential hashing failed: {msg}"),
        }
    }
}

impl std::error::Error for ProvisionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProvisionError::Store(err) => Some(err),
            ProvisionError::Hash(_) => None,
        }
    }
}

impl From<rusqlite::Error> for ProvisionError {
    fn from(err: rusqlite::Error) -> Self {
        ProvisionError::Store(err)
    }
}
