use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::password::hash_password;
use super::ProvisionError;
use crate::config::SiteConfig;

/// Role granted to the provisioned admin account.
pub const ADMIN_ROLE: &str = "admin";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS companies (
  id INTEGER PRIMARY KEY,
  name TEXT NOT NULL UNIQUE,
  slug TEXT NOT NULL,
  email TEXT NOT NULL,
  phone TEXT NOT NULL,
  city TEXT NOT NULL,
  state TEXT NOT NULL,
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE TABLE IF NOT EXISTS users (
  id INTEGER PRIMARY KEY,
  email TEXT NOT NULL UNIQUE,
  password_hash TEXT NOT NULL,
  roles TEXT NOT NULL DEFAULT '[]',
  created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE TABLE IF NOT EXISTS company_users (
  company_id INTEGER NOT NULL REFERENCES companies(id),
  user_id INTEGER NOT NULL REFERENCES users(id),
  created_at TEXT NOT NULL DEFAULT (datetime('now')),
  PRIMARY KEY (company_id, user_id)
);
";

/// Tenant fields persisted on the company row.
#[derive(Debug, Clone, Default)]
pub struct CompanyFields {
    /// Unique tenant lookup key
    pub name: String,
    pub slug: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
}

impl CompanyFields {
    /// Extract the provisioning fields from a resolved configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            name: config.company.name.clone(),
            slug: config.company.slug.clone(),
            email: config.company.email.clone(),
            phone: config.company.phone.clone(),
            city: config.company.city.clone(),
            state: config.company.state.clone(),
        }
    }
}

/// Admin account inputs. The credential is hashed before it reaches the
/// store; the plaintext is never persisted.
#[derive(Debug, Clone)]
pub struct AdminFields {
    /// Unique account lookup key
    pub email: String,
    /// Plaintext credential, hashed with Argon2id during provisioning
    pub password: String,
}

/// Per-entity outcome of one provisioning run.
///
/// The only reachable transitions are `absent → created` and
/// `present → (optionally role-updated) → unchanged`; nothing is deleted.
#[derive(Debug, Clone, Copy)]
pub struct ProvisionOutcome {
    pub company_id: i64,
    pub user_id: i64,
    pub company_created: bool,
    pub user_created: bool,
    /// True when the admin role was unioned into an existing user's roles
    pub role_added: bool,
    pub association_created: bool,
}

/// Handle on the provisioning store.
pub struct ProvisionStore {
    conn: Connection,
}

impl ProvisionStore {
    /// Open (or create) the store at `path` and apply the schema.
    pub fn open(path: &Path) -> Result<Self, ProvisionError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self, ProvisionError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Provision the company, admin user, and association, in that order,
    /// inside a single transaction.
    ///
    /// Idempotent under repeated invocation with identical inputs: lookups
    /// go by company name, user email, and the id pair; only absent rows are
    /// inserted. An existing user keeps its credential and has the admin
    /// role unioned into its role list without discarding other roles.
    pub fn provision(
        &mut self,
        company: &CompanyFields,
        admin: &AdminFields,
    ) -> Result<ProvisionOutcome, ProvisionError> {
        // Hash outside the transaction; hashing failures shouldn't hold a
        // write lock.
        let password_hash = hash_password(&admin.password)?;

        let tx = self.conn.transaction()?;

        let existing_company: Option<i64> = tx
            .query_row(
                "SELECT id FROM companies WHERE name = ?1",
                params![company.name],
                |row| row.get(0),
            )
            .optional()?;
        let (company_id, company_created) = match existing_company {
            Some(id) => (id, false),
            None => {
                tx.execute(
                    "INSERT INTO companies (name, slug, email, phone, city, state)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        company.name,
                        company.slug,
                        company.email,
                        company.phone,
                        company.city,
                        company.state
                    ],
                )?;
                (tx.last_insert_rowid(), true)
            }
        };

        let existing_user: Option<(i64, String)> = tx
            .query_row(
                "SELECT id, roles FROM users WHERE email = ?1",
                params![admin.email],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let (user_id, user_created, role_added) = match existing_user {
            Some((id, roles_json)) => {
                // Union, never replace: other roles survive.
                let mut roles: Vec<String> =
                    serde_json::from_str(&roles_json).unwrap_or_default();
                let added = if roles.iter().any(|r| r == ADMIN_ROLE) {
                    false
                } else {
                    roles.push(ADMIN_ROLE.to_string());
                    // Vec<String> → JSON cannot fail.
                    let updated =
                        serde_json::to_string(&roles).unwrap_or_else(|_| "[\"admin\"]".to_string());
                    tx.execute(
                        "UPDATE users SET roles = ?1 WHERE id = ?2",
                        params![updated, id],
                    )?;
                    true
                };
                (id, false, added)
            }
            None => {
                let roles =
                    serde_json::to_string(&[ADMIN_ROLE]).unwrap_or_else(|_| "[\"admin\"]".to_string());
                tx.execute(
                    "INSERT INTO users (email, password_hash, roles) VALUES (?1, ?2, ?3)",
                    params![admin.email, password_hash, roles],
                )?;
                (tx.last_insert_rowid(), true, false)
            }
        };

        let association_exists: Option<i64> = tx
            .query_row(
                "SELECT 1 FROM company_users WHERE company_id = ?1 AND user_id = ?2",
                params![company_id, user_id],
                |row| row.get(0),
            )
            .optional()?;
        let association_created = if association_exists.is_none() {
            tx.execute(
                "INSERT INTO company_users (company_id, user_id) VALUES (?1, ?2)",
                params![company_id, user_id],
            )?;
            true
        } else {
            false
        };

        tx.commit()?;

        tracing::info!(
            company = %company.name,
            company_created,
            user_created,
            role_added,
            association_created,
            "provisioning complete"
        );

        Ok(ProvisionOutcome {
            company_id,
            user_id,
            company_created,
            user_created,
            role_added,
            association_created,
        })
    }

    /// Row counts (companies, users, associations); used by tests and the
    /// CLI summary.
    pub fn counts(&self) -> Result<(i64, i64, i64), ProvisionError> {
        let companies =
            self.conn
                .query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))?;
        let users = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        let associations =
            self.conn
                .query_row("SELECT COUNT(*) FROM company_users", [], |row| row.get(0))?;
        Ok((companies, users, associations))
    }

    /// Role list for a user, by email. `None` when the user is absent.
    pub fn user_roles(&self, email: &str) -> Result<Option<Vec<String>>, ProvisionError> {
        let roles_json: Option<String> = self
            .conn
            .query_row(
                "SELECT roles FROM users WHERE email = ?1",
                params![email],
                |row| row.get(0),
            )
            .optional()?;
        Ok(roles_json.map(|json| serde_json::from_str(&json).unwrap_or_default()))
    }

    #[cfg(test)]
    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}
