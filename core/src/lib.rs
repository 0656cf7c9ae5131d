//! Blocking client for the Travis CI API (v2): settings environment
//! variables and repository hooks.
//!
//! # Overview
//! Each service method maps to exactly one HTTP exchange: encode options into
//! a query string, build an `HttpRequest`, dispatch it through the client's
//! `Transport`, and decode the JSON envelope into typed values. There are no
//! retries, no pagination and no caching.
//!
//! # Design
//! - `Client` is stateless apart from its config and transport.
//! - Successful calls return `Response<T>`, pairing the decoded value with
//!   the raw `HttpResponse`. Errors that happen after the server answered
//!   carry that response too (`ApiError::response`).
//! - `Transport` is the I/O seam; `UreqTransport` is the default.
//!
//! ```no_run
//! use travis_core::{Client, ClientConfig, HookListOptions};
//!
//! let client = Client::new(ClientConfig::from_env());
//! let hooks = client.hooks().list(&HookListOptions::default())?;
//! for hook in &hooks.value {
//!     println!("{} active={}", hook.name, hook.active);
//! }
//! # Ok::<(), travis_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod env_vars;
pub mod error;
pub mod hooks;
pub mod http;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::{url_with_options, Client};
pub use config::ClientConfig;
pub use env_vars::EnvironmentVariablesService;
pub use error::ApiError;
pub use hooks::HooksService;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Response, Transport, UreqTransport};
pub use types::{EnvironmentVariable, EnvironmentVariablesListOptions, Hook, HookListOptions, HookPutResult};
