//! fofa - FOFA search from the command line

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    fofa_cli::run().await
}
