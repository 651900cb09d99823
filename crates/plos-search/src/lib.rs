//! PLOS Article Explorer
//!
//! A terminal client for the public PLOS article-search API. One search
//! fetches the full result list; filtering, sorting and pagination run
//! client-side over the in-memory results, with CSV export and a per-article
//! detail view.
//!
//! # Features
//!
//! - **Single fetch per query**: filter/sort/page changes never re-hit the API
//! - **Pure view pipeline**: type filter, year range, date sort, pagination
//! - **Stale-response rejection**: overlapping searches resolve to the latest
//! - **CSV export**: full result list in store order
//!
//! # Example
//!
//! ```no_run
//! use plos_search::{config::Config, session::Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut session = Session::new(Config::new())?;
//!     let page = session.search("cancer").await?;
//!     println!("{} articles", page.total);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod formatters;
pub mod models;
pub mod session;
pub mod store;
pub mod view;

pub use client::PlosClient;
pub use config::Config;
pub use error::{ClientError, SessionError};
pub use session::Session;
