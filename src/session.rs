//! Session bootstrap. Produces a stable user identifier exactly once per
//! process, with three fallback tiers: token exchange, anonymous
//! identity, and a locally generated id when the provider is down.
//! Provider failures are logged and masked, never surfaced as errors.

use chrono::Utc;
use rusqlite::{OptionalExtension, params};
use uuid::Uuid;

use crate::error::StorageError;
use crate::storage::Database;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityTier {
    Token,
    Anonymous,
    Local,
}

/// Resolved once at startup and injected into every screen; read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub tier: IdentityTier,
}

pub trait IdentityProvider {
    fn exchange_token(&self, token: &str) -> Result<String, StorageError>;
    fn anonymous(&self) -> Result<String, StorageError>;
}

/// Identity provider persisting ids in the local database, so the same
/// anonymous user (or the same token) resolves to the same id across
/// runs.
pub struct StoredIdentityProvider<'a> {
    db: &'a Database,
}

impl<'a> StoredIdentityProvider<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn lookup_or_create(&self, kind: &str) -> Result<String, StorageError> {
        let conn = self.db.connection();
        let existing: Option<String> = conn
            .query_row(
                "SELECT user_id FROM identities WHERE kind = ?1",
                params![kind],
                |row| row.get(0),
            )
            .optional()?;
        if let Some(user_id) = existing {
            return Ok(user_id);
        }

        let user_id = Uuid::new_v4().to_string();
        conn.execute(
            "INSERT INTO identities (kind, user_id, created_at) VALUES (?1, ?2, ?3)",
            params![kind, user_id, Utc::now().timestamp()],
        )?;
        Ok(user_id)
    }
}

impl IdentityProvider for StoredIdentityProvider<'_> {
    fn exchange_token(&self, token: &str) -> Result<String, StorageError> {
        self.lookup_or_create(&format!("token:{token}"))
    }

    fn anonymous(&self) -> Result<String, StorageError> {
        self.lookup_or_create("anonymous")
    }
}

pub fn bootstrap(provider: &dyn IdentityProvider, token: Option<&str>) -> Session {
    if let Some(token) = token {
        match provider.exchange_token(token) {
            Ok(user_id) => {
                return Session {
                    user_id,
                    tier: IdentityTier::Token,
                };
            }
            Err(err) => {
                log::warn!("Token exchange failed, trying anonymous sign-in: {err}");
            }
        }
    }

    match provider.anonymous() {
        Ok(user_id) => Session {
            user_id,
            tier: IdentityTier::Anonymous,
        },
        Err(err) => {
            log::error!("Anonymous sign-in failed, continuing with a local identity: {err}");
            Session {
                user_id: Uuid::new_v4().to_string(),
                tier: IdentityTier::Local,
            }
        }
    }
}
