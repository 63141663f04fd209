//! # cloner-fetch
//!
//! Workspace fetcher: an authenticated client for the workspace API.
//!
//! Build a [`ClientConfig`] from the run settings, wrap it in a
//! [`WorkspaceClient`], and await [`WorkspaceClient::get_by_id`].

pub mod client;
pub mod config;
pub mod error;

pub use client::WorkspaceClient;
pub use config::ClientConfig;
pub use error::FetchError;
