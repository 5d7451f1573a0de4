use anyhow::{Context, Result};

use super::CommandContext;
use crate::graphql::build_schema;
use crate::server::run_server;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>, host: Option<String>) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(port) = port {
        settings.port = port;
    }
    if let Some(host) = host {
        settings.host = host;
    }

    tokio::runtime::Runtime::new()?.block_on(async {
        // Nothing is bound until the store has answered a ping
        let store = ctx.connect().await?;
        let schema = build_schema(store);
        run_server(schema, &settings)
            .await
            .with_context(|| format!("Failed to serve on {}", settings.bind_address()))
    })
}
