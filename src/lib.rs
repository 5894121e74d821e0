//! DID Crab
//!
//! A very minimal [AT Protocol] handle resolver.
//!
//! Serves the [DID] mapped to whatever hostname a request was addressed to, so that a domain
//! (or a whole set of domains pointed at one instance) can be verified as a handle over HTTPS.
//! Mappings are read from a configurable [handle store][handle_store]; requests for unknown
//! handles get a short plain-text brush-off instead of an error.
//!
//! [AT Protocol]: https://atproto.com/specs/handle
//! [DID]: https://www.w3.org/TR/did-core/
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod error;
pub mod handle_store;
pub mod hostname;
pub mod resolver;

use crate::handle_store::{file, memory, sqlite};
pub use api::new as new_http;
pub use config::{Config, SharedConfig};
pub use file::FileHandleStore;
pub use memory::InMemoryHandleStore;
pub use resolver::{Resolver, FALLBACK_BODY};
pub use sqlite::SqliteHandleStore;
