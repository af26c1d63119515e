//! Core types for the FOFA search client.
//!
//! This crate provides the foundational types used across the FOFA library:
//!
//! - **Types**: [`Record`], [`Field`], [`FieldMapping`] and [`SearchResults`]
//! - **Reply parsing**: [`parse_reply`] turns a raw search reply into records
//! - **Errors**: Comprehensive error handling with [`FofaError`]
//!
//! # Example
//!
//! ```rust
//! use fofa_core::{parse_records, FieldMapping};
//!
//! let body = br#"{"size":1,"results":[["1.2.3.4","example.com"]]}"#;
//! let records = parse_records(body, &FieldMapping::parse("ip,domain")).unwrap();
//! assert_eq!(records[0].domain, "example.com");
//! ```

#![doc(html_root_url = "https://docs.rs/fofa-core/0.1.0")]

mod error;
mod reply;
pub mod types;

pub use error::{FofaError, Result};
pub use reply::{parse_records, parse_reply};
pub use types::*;
