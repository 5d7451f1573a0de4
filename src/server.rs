//! HTTP front door for the GraphQL schema.
//!
//! `POST <path>` executes GraphQL requests, `GET <path>` serves the GraphiQL
//! IDE. Cross-origin requests are allowed from any origin.

use std::future::Future;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::config::ServerSettings;
use crate::error::Result;
use crate::graphql::GatewaySchema;

pub fn router(schema: GatewaySchema, path: &str) -> Router {
    let page = GraphiQLSource::build().endpoint(path).finish();

    Router::new()
        .route(
            path,
            get(move || {
                let page = page.clone();
                async move { Html(page) }
            })
            .post_service(GraphQL::new(schema)),
        )
        .layer(CorsLayer::permissive())
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn run_server(schema: GatewaySchema, settings: &ServerSettings) -> Result<()> {
    let app = router(schema, &settings.path);
    let listener = TcpListener::bind(settings.bind_address()).await?;

    tracing::info!("Server ready at {}", settings.endpoint_url());

    serve(listener, app, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
