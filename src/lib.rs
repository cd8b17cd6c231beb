//! # mailcli
//! Asynchronous client and command-line frontend for a remote mailbox HTTP API, providing simple methods to list, fetch, and delete stored email messages from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For developers inspecting a hosted test-mail inbox from scripts, CI jobs, or a terminal: configure with [`ClientBuilder`], list or search messages ([`Message`]), fetch a full message by id, then delete what is no longer needed.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a mail server, SMTP sender, or local mailbox. It only proxies the remote API and trusts it for validation, search relevance, and authorization enforcement. No retries, caching, or local storage.
//!
//! ## Errors
//! All network calls surface transport failures as [`Error::Request`]; a non-2xx status becomes [`Error::Api`] carrying the status code and a truncated response body, and malformed payloads become [`Error::Json`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use mailcli::{Client, ListQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailcli::Error> {
//!     let client = Client::builder()
//!         .base_url("https://mail.example.com/api")
//!         .token("secret")
//!         .build()?;
//!
//!     let page = client.list(&ListQuery::default()).await?;
//!     for msg in page.data {
//!         println!("From: {}, Subject: {}", msg.from_addr, msg.subject);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;

pub mod cli;
pub mod render;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, ListQuery};
pub use error::Error;
pub use models::{
    BatchDeleteRequest, BatchDeleteResponse, DetailResponse, LatestResponse, ListResponse, Message,
};

/// Result type alias for mailbox API operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
