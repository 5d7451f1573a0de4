use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todoql")]
#[command(
    author,
    version,
    about = "A GraphQL gateway for users and their todos, backed by a document store"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to ./todoql.toml when present)
    #[arg(long, global = true, env = "TODOQL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Document store connection string (mongodb://... or memory://)
    #[arg(long, global = true, env = "TODOQL_STORE_URI")]
    pub store_uri: Option<String>,

    /// Database name inside the document store
    #[arg(long, global = true, env = "TODOQL_DATABASE")]
    pub database: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "TODOQL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "TODOQL_PORT")]
        port: Option<u16>,

        /// Interface to bind
        #[arg(long, env = "TODOQL_HOST")]
        host: Option<String>,
    },

    /// Execute a GraphQL query against the configured store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}
