//! A typed client for the MailerLite v2 REST API: subscriber groups,
//! segments, campaigns and account statistics.
//!
//! Every call is a single HTTP request. The status code decides the outcome:
//! 200/201 decode the JSON body, 204 yields an empty payload and error
//! statuses map to [`Error`] variants.
//!
//! ## Example
//!
//! ```no_run
//! use mailerlite::{models::ListOptions, Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config::new("api-abcd1234"))?;
//!
//!     for group in client.list_groups(&ListOptions::default()).await? {
//!         println!("{} ({} active)", group.name, group.active);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{Client, Payload};
pub use config::Config;
pub use error::{Error, Result};
pub use reqwest::Method;
