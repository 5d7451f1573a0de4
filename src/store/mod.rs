//! Document store adapter.
//!
//! Records are persisted as schema-less JSON documents in named collections
//! and selected with equality [`Filter`]s.
//!
//! ## Backends
//!
//! | URI scheme | Backend |
//! |---|---|
//! | `memory://` | [`MemoryStore`], in-process, insertion ordered |
//! | `mongodb://`, `mongodb+srv://` | [`MongoStore`], via the official driver |
//!
//! ## Components
//!
//! - [`DocumentStore`]: filter-based CRUD primitives every backend implements
//! - [`Collection`]: typed view over one collection of a shared store
//! - [`connect`]: open the backend named by the configured URI

mod collection;
mod filter;
mod memory;
mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::config::StoreSettings;
use crate::error::{GatewayError, Result};

pub use collection::{Collection, Record};
pub use filter::Filter;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// A stored record as a JSON object.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Process-wide store handle shared by every request.
pub type SharedStore = Arc<dyn DocumentStore>;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Confirm the store is reachable.
    async fn ping(&self) -> Result<()>;

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>>;

    /// All matching documents in store iteration order. An empty filter returns everything.
    async fn find_all(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>>;

    async fn insert(&self, collection: &str, doc: Document) -> Result<Document>;

    /// Overwrite the keys present in `patch` on the first match and return the
    /// post-update document.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
    ) -> Result<Option<Document>>;

    /// Remove the first match and return it as it was before removal.
    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>>;
}

/// Serialize a record or patch into a document.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(GatewayError::Store(format!(
            "expected a document, got {}",
            other
        ))),
    }
}

/// Open the backend selected by the URI scheme in `settings`.
pub async fn connect(settings: &StoreSettings) -> Result<SharedStore> {
    let url = Url::parse(&settings.uri)
        .map_err(|e| GatewayError::Config(format!("invalid store URI '{}': {}", settings.uri, e)))?;

    match url.scheme() {
        "memory" => {
            tracing::info!("Using in-memory document store");
            Ok(Arc::new(MemoryStore::new()))
        }
        "mongodb" | "mongodb+srv" => {
            let store = MongoStore::connect(&settings.uri, &settings.database).await?;
            tracing::info!(database = %settings.database, "Using MongoDB document store");
            Ok(Arc::new(store))
        }
        other => Err(GatewayError::Config(format!(
            "unsupported store scheme '{}'",
            other
        ))),
    }
}
