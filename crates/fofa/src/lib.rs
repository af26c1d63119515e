//! Rust client for the FOFA internet-asset search API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fofa::FofaClient;
//!
//! #[tokio::main]
//! async fn main() -> fofa::Result<()> {
//!     let client = FofaClient::new("you@example.com", "your-api-key")?;
//!
//!     // Default columns: domain, host, ip, port, title, country, city
//!     let records = client
//!         .search()
//!         .query(r#"domain="example.com""#)
//!         .records()
//!         .await?;
//!
//!     for record in &records {
//!         println!("{} {}:{}", record.domain, record.ip, record.port);
//!     }
//!
//!     // Custom columns, any order
//!     let results = client
//!         .search()
//!         .query(r#"title="login""#)
//!         .fields("ip,port")
//!         .page(2)
//!         .send()
//!         .await?;
//!
//!     println!("Total: {} matches", results.size);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/fofa/0.1.0")]

// Re-export core types
pub use fofa_core::*;

// Re-export client
pub use fofa_client::{api, mask, Credentials, FofaClient, FofaClientBuilder, EMAIL_ENV, KEY_ENV};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
