use crate::error::Error;
use crate::handle_store::sqlite::{self, DEFAULT_TABLE};
use crate::handle_store::{
    DynHandleStore, FileHandleStore, HandleMapping, InMemoryHandleStore, SqliteHandleStore,
};
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub timeout: Duration,
    pub store: StoreConfig,
}

/// Which [`HandleStore`][crate::handle_store::HandleStore] backs the resolver.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    Memory {
        mappings: Vec<HandleMapping>,
    },
    File {
        path: String,
    },
    Sqlite {
        url: String,
        #[serde(default = "default_table")]
        table: String,
    },
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl Config {
    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] or [`Error::InvalidJSON`] if the file can't be read or parsed, and
    /// [`Error::InvalidTableName`] if a SQLite store names an unusable table.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        conf.validate()?;
        Ok(conf)
    }

    /// Build the configured handle store.
    ///
    /// # Errors
    ///
    /// Returns the error of the backend's constructor, e.g. an unreadable mappings file or a
    /// database that can't be opened.
    pub async fn handle_store(&self) -> Result<DynHandleStore, Error> {
        Ok(match &self.store {
            StoreConfig::Memory { mappings } => {
                Arc::new(InMemoryHandleStore::new(mappings.clone()))
            }
            StoreConfig::File { path } => Arc::new(FileHandleStore::try_from_file(path).await?),
            StoreConfig::Sqlite { url, table } => {
                Arc::new(SqliteHandleStore::connect(url, table).await?)
            }
        })
    }

    fn validate(&self) -> Result<(), Error> {
        match &self.store {
            StoreConfig::Sqlite { table, .. } => sqlite::validate_table_name(table),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn sqlite_table_defaults() {
        let f = config_file(
            r#"{
                "bind_addr": "0.0.0.0:8080",
                "timeout": 10,
                "store": { "type": "sqlite", "url": "sqlite://handles.db" }
            }"#,
        );
        let config = Config::try_from_file(f.path()).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(matches!(
            config.store,
            StoreConfig::Sqlite { ref table, .. } if table == "atproto_did"
        ));
    }

    #[test]
    fn bad_table_rejected() {
        let f = config_file(
            r#"{
                "bind_addr": "127.0.0.1:8080",
                "timeout": 5,
                "store": { "type": "sqlite", "url": "sqlite://handles.db", "table": "x; --" }
            }"#,
        );
        assert!(matches!(
            Config::try_from_file(f.path()),
            Err(Error::InvalidTableName(_))
        ));
    }

    #[test]
    fn unknown_store_type() {
        let f = config_file(
            r#"{
                "bind_addr": "127.0.0.1:8080",
                "timeout": 5,
                "store": { "type": "postgres", "url": "postgres://localhost" }
            }"#,
        );
        assert!(matches!(
            Config::try_from_file(f.path()),
            Err(Error::InvalidJSON(_))
        ));
    }

    #[tokio::test]
    async fn memory_store_from_config() {
        let f = config_file(
            r#"{
                "bind_addr": "127.0.0.1:8080",
                "timeout": 5,
                "store": {
                    "type": "memory",
                    "mappings": [ { "handle": "alice.example", "did": "did:plc:abc123" } ]
                }
            }"#,
        );
        let store = Config::try_from_file(f.path())
            .unwrap()
            .handle_store()
            .await
            .unwrap();
        let rows = store.lookup("alice.example").await.unwrap();
        assert_eq!(rows[0].did, "did:plc:abc123");
    }
}
