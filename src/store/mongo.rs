use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Bson, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Database};

use super::{Document, DocumentStore, Filter};
use crate::error::{GatewayError, Result};

/// Key of the driver-assigned primary key, never exposed past this module.
const PRIMARY_KEY: &str = "_id";

pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Create a client for `uri` and select `database`.
    ///
    /// The driver connects lazily; call [`DocumentStore::ping`] to confirm the
    /// server is reachable.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| GatewayError::Config(format!("invalid MongoDB URI: {}", e)))?;
        Ok(Self {
            database: client.database(database),
        })
    }

    fn collection(&self, name: &str) -> mongodb::Collection<bson::Document> {
        self.database.collection(name)
    }
}

fn to_bson(doc: &Document) -> Result<bson::Document> {
    Ok(bson::to_document(doc)?)
}

fn filter_to_bson(filter: &Filter) -> Result<bson::Document> {
    to_bson(&filter.to_document())
}

fn from_bson(mut doc: bson::Document) -> Document {
    doc.remove(PRIMARY_KEY);
    match Bson::Document(doc).into_relaxed_extjson() {
        serde_json::Value::Object(map) => map,
        _ => Document::new(),
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| GatewayError::Store(format!("health check failed: {}", e)))?;
        Ok(())
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>> {
        let found = self
            .collection(collection)
            .find_one(filter_to_bson(filter)?)
            .await?;
        Ok(found.map(from_bson))
    }

    async fn find_all(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>> {
        let cursor = self
            .collection(collection)
            .find(filter_to_bson(filter)?)
            .await?;
        let docs: Vec<bson::Document> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(from_bson).collect())
    }

    async fn insert(&self, collection: &str, doc: Document) -> Result<Document> {
        self.collection(collection).insert_one(to_bson(&doc)?).await?;
        Ok(doc)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
    ) -> Result<Option<Document>> {
        // `$set` rejects an empty document
        if patch.is_empty() {
            return self.find_one(collection, filter).await;
        }

        let set = to_bson(&patch)?;
        let updated = self
            .collection(collection)
            .find_one_and_update(filter_to_bson(filter)?, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(from_bson))
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>> {
        let deleted = self
            .collection(collection)
            .find_one_and_delete(filter_to_bson(filter)?)
            .await?;
        Ok(deleted.map(from_bson))
    }
}
