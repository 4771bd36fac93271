//! Generic, type-tagged object store consumed by the todo routes.
//!
//! The routes only see the `ObjectStore` trait. `MemoryStore` is the
//! in-process backend used by the default binary and by tests; any other
//! backend (embedded database, remote service) plugs in behind the same trait.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Object type under which todo items are persisted.
pub const TODO_TYPE: &str = "todo";

pub type Attributes = Map<String, Value>;

/// Wire envelope wrapping any stored entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedObject {
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub attributes: Attributes,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Saved object [{object_type}/{id}] not found")]
    NotFound { object_type: String, id: String },

    #[error("Unsupported saved object type: '{0}'")]
    UnsupportedType(String),

    #[error("store failure: {0}")]
    Internal(String),
}

#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    async fn find(&self, object_type: &str) -> Result<Vec<SavedObject>, StoreError>;
    async fn get(&self, object_type: &str, id: &str) -> Result<SavedObject, StoreError>;
    async fn create(
        &self,
        object_type: &str,
        attributes: Attributes,
    ) -> Result<SavedObject, StoreError>;
    async fn update(
        &self,
        object_type: &str,
        id: &str,
        attributes: Attributes,
    ) -> Result<SavedObject, StoreError>;
    /// Returns the store's acknowledgment payload.
    async fn delete(&self, object_type: &str, id: &str) -> Result<Value, StoreError>;
}

/// Objects of every registered type, kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    types: HashSet<String>,
    objects: RwLock<HashMap<String, IndexMap<String, Attributes>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, object_type: &str) -> Self {
        self.register_type(object_type);
        self
    }

    pub fn register_type(&mut self, object_type: &str) {
        self.types.insert(object_type.to_string());
    }

    fn check_type(&self, object_type: &str) -> Result<(), StoreError> {
        if self.types.contains(object_type) {
            Ok(())
        } else {
            Err(StoreError::UnsupportedType(object_type.to_string()))
        }
    }
}

fn envelope(object_type: &str, id: &str, attributes: &Attributes) -> SavedObject {
    SavedObject {
        id: id.to_string(),
        object_type: object_type.to_string(),
        attributes: attributes.clone(),
    }
}

fn not_found(object_type: &str, id: &str) -> StoreError {
    StoreError::NotFound {
        object_type: object_type.to_string(),
        id: id.to_string(),
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn find(&self, object_type: &str) -> Result<Vec<SavedObject>, StoreError> {
        self.check_type(object_type)?;
        let objects = self.objects.read().await;
        Ok(objects
            .get(object_type)
            .map(|bucket| {
                bucket
                    .iter()
                    .map(|(id, attrs)| envelope(object_type, id, attrs))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default())
    }

    async fn get(&self, object_type: &str, id: &str) -> Result<SavedObject, StoreError> {
        self.check_type(object_type)?;
        let objects = self.objects.read().await;
        objects
            .get(object_type)
            .and_then(|bucket| bucket.get(id))
            .map(|attrs| envelope(object_type, id, attrs))
            .ok_or_else(|| not_found(object_type, id))
    }

    async fn create(
        &self,
        object_type: &str,
        attributes: Attributes,
    ) -> Result<SavedObject, StoreError> {
        self.check_type(object_type)?;
        let id = Uuid::new_v4().to_string();
        let created = envelope(object_type, &id, &attributes);
        self.objects
            .write()
            .await
            .entry(object_type.to_string())
            .or_default()
            .insert(id, attributes);
        Ok(created)
    }

    async fn update(
        &self,
        object_type: &str,
        id: &str,
        attributes: Attributes,
    ) -> Result<SavedObject, StoreError> {
        self.check_type(object_type)?;
        let mut objects = self.objects.write().await;
        let stored = objects
            .get_mut(object_type)
            .and_then(|bucket| bucket.get_mut(id))
            .ok_or_else(|| not_found(object_type, id))?;
        stored.extend(attributes);
        Ok(envelope(object_type, id, stored))
    }

    async fn delete(&self, object_type: &str, id: &str) -> Result<Value, StoreError> {
        self.check_type(object_type)?;
        let mut objects = self.objects.write().await;
        objects
            .get_mut(object_type)
            .and_then(|bucket| bucket.shift_remove(id))
            .map(|_| Value::Object(Map::new()))
            .ok_or_else(|| not_found(object_type, id))
    }
}
