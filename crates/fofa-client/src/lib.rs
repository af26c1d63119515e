//! HTTP client for the FOFA search API.
//!
//! This crate provides the main [`FofaClient`] for querying FOFA's
//! `/api/v1/search/all` endpoint, either for the raw reply body or for parsed
//! [`Record`]s.

#![doc(html_root_url = "https://docs.rs/fofa-client/0.1.0")]

mod client;
mod config;
pub mod api;

pub use client::{FofaClient, FofaClientBuilder};
pub use config::*;
pub use fofa_core::{FieldMapping, FofaError, Record, Result, SearchResults};
