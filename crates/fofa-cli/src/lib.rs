//! # fofa-cli
//!
//! Command-line interface for the FOFA internet-asset search engine.
//!
//! ## Features
//!
//! - **Search**: any FOFA query, custom field lists, paging, raw replies
//! - **Configuration**: email, key and defaults stored in a TOML file
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
