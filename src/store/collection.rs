use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Document, Filter, SharedStore, to_document};
use crate::error::{GatewayError, Result};
use crate::model::{Todo, User};

/// A record type bound to a named collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: &'static str;
}

impl Record for User {
    const COLLECTION: &'static str = "User";
}

impl Record for Todo {
    const COLLECTION: &'static str = "Todo";
}

/// Typed access to the collection holding `T`.
pub struct Collection<T> {
    store: SharedStore,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub async fn find_one(&self, filter: &Filter) -> Result<Option<T>> {
        tracing::debug!(collection = T::COLLECTION, %filter, "find_one");
        self.store
            .find_one(T::COLLECTION, filter)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn find_all(&self, filter: &Filter) -> Result<Vec<T>> {
        tracing::debug!(collection = T::COLLECTION, %filter, "find_all");
        self.store
            .find_all(T::COLLECTION, filter)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn insert(&self, record: &T) -> Result<T> {
        tracing::debug!(collection = T::COLLECTION, "insert");
        let doc = self.store.insert(T::COLLECTION, to_document(record)?).await?;
        decode(doc)
    }

    pub async fn update_one<P>(&self, filter: &Filter, patch: &P) -> Result<Option<T>>
    where
        P: Serialize + Sync,
    {
        tracing::debug!(collection = T::COLLECTION, %filter, "update_one");
        self.store
            .update_one(T::COLLECTION, filter, to_document(patch)?)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn delete_one(&self, filter: &Filter) -> Result<Option<T>> {
        tracing::debug!(collection = T::COLLECTION, %filter, "delete_one");
        self.store
            .delete_one(T::COLLECTION, filter)
            .await?
            .map(decode)
            .transpose()
    }
}

fn decode<T: DeserializeOwned>(doc: Document) -> Result<T> {
    serde_json::from_value(serde_json::Value::Object(doc))
        .map_err(|e| GatewayError::Store(format!("malformed document: {}", e)))
}
