//! Error types.

/// Error enumerates the possible DID Crab error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a request has neither an absolute-form URI nor a `Host` header, so no
    /// handle can be derived from it.
    #[error("request has no host")]
    MissingHost,

    /// Returned when the request host can't be parsed as a URI authority, or when the parsed
    /// host isn't a valid IP literal or domain name.
    #[error("request host is malformed: \"{0}\"")]
    MalformedHost(String),

    /// Returned when the [SQLite handle store][crate::handle_store::sqlite::SqliteHandleStore]
    /// can't be reached or a lookup query fails.
    #[error("handle store query failed")]
    Store(#[from] sqlx::Error),

    /// Returned when a configured SQLite table name isn't a plain SQL identifier. Table names
    /// can't be bound as query parameters, so anything else is refused.
    #[error("invalid handle table name: \"{0}\"")]
    InvalidTableName(String),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when processing JSON from disk (e.g. [loading a `Config`][crate::config::Config::try_from_file],
    /// or [reading a `FileHandleStore`][crate::handle_store::file::FileHandleStore::try_from_file])
    /// fails due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
