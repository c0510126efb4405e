//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use legible_core::Config;

use crate::server::ReadabilityServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(
        aggregation = config.aggregation.as_str(),
        max_input_bytes = ?max_input_bytes,
        "starting MCP server on stdio"
    );

    let server = ReadabilityServer::new(config.score_options(), max_input_bytes);
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server terminated abnormally")?;

    info!("MCP server stopped");
    Ok(())
}
