//! Dan de engine service entry point.
//!
//! Initializes configuration and logging, then starts the HTTP server.

use dande_engine::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
