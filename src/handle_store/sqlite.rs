//! A SQLite-backed implementation of the [`HandleStore`][super::HandleStore] trait.
//!
//! Expects a table with at least `handle` and `did` text columns. Creating and filling that
//! table is left to whoever administers the database; the connection is opened read-only.
use crate::error::Error;
use crate::handle_store::{HandleMapping, HandleStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;

/// Table queried when the configuration doesn't name one.
pub const DEFAULT_TABLE: &str = "atproto_did";

#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct SqliteHandleStore {
    db: SqlitePool,
    query: String,
}

impl SqliteHandleStore {
    /// Wrap an existing pool, querying `table` for mappings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTableName`] if `table` isn't a plain SQL identifier.
    pub fn new(db: SqlitePool, table: &str) -> Result<Self, Error> {
        validate_table_name(table)?;
        Ok(Self {
            db,
            query: format!("SELECT handle, did FROM \"{table}\" WHERE handle = ?1"),
        })
    }

    /// Open the database at `url` read-only and query `table` for mappings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTableName`] if `table` isn't a plain SQL identifier.
    ///
    /// Returns [`Error::Store`] if the URL is invalid or the database can't be opened.
    pub async fn connect(url: &str, table: &str) -> Result<Self, Error> {
        validate_table_name(table)?;
        let options = SqliteConnectOptions::from_str(url)?.read_only(true);
        let db = SqlitePoolOptions::new().connect_with(options).await?;
        Self::new(db, table)
    }
}

/// Check that `table` can be spliced into a query as an identifier.
///
/// # Errors
///
/// Returns [`Error::InvalidTableName`] unless `table` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn validate_table_name(table: &str) -> Result<(), Error> {
    let mut chars = table.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidTableName(table.to_string()))
    }
}

#[async_trait::async_trait]
impl HandleStore for SqliteHandleStore {
    async fn lookup(&self, handle: &str) -> Result<Vec<HandleMapping>, Error> {
        let rows = sqlx::query(&self.query)
            .bind(handle)
            .fetch_all(&self.db)
            .await?;

        rows.iter()
            .map(|row| -> Result<HandleMapping, Error> {
                Ok(HandleMapping {
                    handle: row.try_get("handle")?,
                    did: row.try_get("did")?,
                })
            })
            .collect()
    }
}
