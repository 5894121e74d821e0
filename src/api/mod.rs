//! HTTP API resolving handles to DIDs.
//!
//! # API Endpoints
//!
//! ## Any path (any method)
//!
//!   The handle is the hostname the request was addressed to, taken from an absolute-form
//!   request target or else the `Host` header. Port, path, query, method, other headers and
//!   body are all ignored.
//!
//!   Returns HTTP 200 (OK) with a `text/plain` body holding the DID mapped to the handle,
//!   exactly as stored:
//!
//!   ```text
//!   did:plc:abc123
//!   ```
//!
//!   When no mapping exists, returns HTTP 200 (OK) with the body `Why are you here?`.
//!
//!   Returns HTTP 400 (Bad Request) when no usable hostname can be derived from the request,
//!   and HTTP 500 (Internal Server Error) when the handle store fails. Error bodies carry only
//!   the status reason.
//!
//!   Requests exceeding the configured `timeout` get HTTP 408 (Request Timeout).

mod api_error;
mod routes;
pub mod server;

pub use server::{app, new};
