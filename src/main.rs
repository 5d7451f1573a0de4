use anyhow::Result;
use clap::Parser;

use todoql::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use todoql::cli::{Cli, Commands};
use todoql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    if let Commands::Schema = cli.command {
        return handle_schema();
    }

    let ctx = CommandContext::from_cli(&cli)?;

    match cli.command {
        Commands::Serve { port, host } => handle_serve(ctx, port, host),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(),
    }
}
