//! Command implementations.

pub mod config;
pub mod search;

use fofa::{Credentials, FofaClient, FofaClientBuilder};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Account email
    pub email: Option<String>,

    /// API key
    pub key: Option<String>,

    /// Override for the API base URL
    pub base_url: Option<String>,

    /// Skip TLS certificate verification
    pub insecure: bool,

    /// Output format
    pub output_format: OutputFormat,

    /// Config file in use
    pub config_path: PathBuf,
}

impl Context {
    /// Get the credentials, returning an error if either half is missing.
    pub fn require_credentials(&self) -> anyhow::Result<Credentials> {
        match (self.email.as_deref(), self.key.as_deref()) {
            (Some(email), Some(key)) if !email.is_empty() && !key.is_empty() => {
                Ok(Credentials::new(email, key))
            }
            _ => Err(anyhow::anyhow!(
                "FOFA credentials required.\n\n\
                 Set them with one of:\n  \
                 1. --email <EMAIL> --key <KEY>\n  \
                 2. FOFA_EMAIL and FOFA_KEY environment variables\n  \
                 3. fofa config set email <EMAIL> && fofa config set key <KEY>\n\n\
                 Find your key at: https://fofa.info/userInfo"
            )),
        }
    }

    /// Create a FOFA client with the configured credentials.
    pub fn client(&self) -> anyhow::Result<FofaClient> {
        let mut builder = FofaClientBuilder::from_credentials(self.require_credentials()?)
            .danger_accept_invalid_certs(self.insecure);

        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }

        Ok(builder.build()?)
    }
}
