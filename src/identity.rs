//! Site identity allocation.
//!
//! Every generation run mints exactly one [`SiteId`] - a ULID, not derived
//! from any configuration field, so it carries no collision risk with slugs
//! or emails. The identifier is persisted into the generated project's
//! `.env` alongside the backend location and is never mutated afterward; its
//! consumer is the generated site's own multi-tenant scoping logic.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Strongly typed per-site identifier backed by ULID.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct SiteId(pub ulid::Ulid);

impl SiteId {
    /// Mint a fresh identifier. Called once per generation run.
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }
}

impl Default for SiteId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SiteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SiteId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = ulid::Ulid::from_string(s)?;
        Ok(SiteId(id))
    }
}

impl Serialize for SiteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SiteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<SiteId>()
            .map_err(|_| serde::de::Error::custom("invalid site id"))
    }
}

/// Write the generated project's runtime environment file.
///
/// Contains the minted [`SiteId`] and the backend location the generated
/// site talks to. Written once at the end of materialization; this module
/// never rewrites an existing identity.
pub fn write_env_file(project_root: &Path, site_id: SiteId, backend_url: &str) -> std::io::Result<()> {
    let contents = format!("SITE_ID={site_id}\nAPI_BASE_URL={backend_url}\n");
    fs::write(project_root.join(".env"), contents)
}
