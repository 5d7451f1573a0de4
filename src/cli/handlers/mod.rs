mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::GatewayConfig;
use crate::store::{self, SharedStore};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: GatewayConfig,
}

impl CommandContext {
    /// Resolve configuration: CLI flags and env override the file, which overrides defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (mut config, path) = GatewayConfig::load(cli.config.as_deref(), &cwd)
            .context("Failed to load configuration")?;

        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "Loaded configuration file");
        }
        if let Some(uri) = &cli.store_uri {
            config.store.uri = uri.clone();
        }
        if let Some(database) = &cli.database {
            config.store.database = database.clone();
        }
        config.validate()?;

        Ok(Self { config })
    }

    /// Open the document store and confirm it answers before anything is served.
    pub async fn connect(&self) -> Result<SharedStore> {
        let store = store::connect(&self.config.store)
            .await
            .context("Failed to open document store")?;
        store
            .ping()
            .await
            .context("Failed to connect to document store")?;
        tracing::info!("Connected to document store");
        Ok(store)
    }
}

/// Parse `--variables` JSON, defaulting to no variables.
fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid --variables JSON"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Execute one GraphQL request against a freshly connected store and print the response.
fn execute(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let vars = parse_variables(variables)?;

    let response = tokio::runtime::Runtime::new()?.block_on(async {
        let store = ctx.connect().await?;
        let schema = crate::graphql::build_schema(store);
        let request = async_graphql::Request::new(query).variables(vars);
        anyhow::Ok(schema.execute(request).await)
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        let vars = parse_variables(Some(r#"{"userID":"u1"}"#.to_string())).unwrap();
        assert_eq!(
            vars.get(&async_graphql::Name::new("userID")),
            Some(&async_graphql::Value::from("u1"))
        );
        assert!(parse_variables(None).unwrap().is_empty());
        assert!(parse_variables(Some("not json".to_string())).is_err());
    }
}
