//! MongoDB client and collection wrapper
//!
//! Schemas declare their shape through [`IntoValidator`]; the wrapper makes
//! sure the store enforces that shape before handing out a handle, so every
//! write against the collection is checked server-side.

use bson::{doc, oid::ObjectId, Document};
use mongodb::{
    options::UpdateModifications,
    results::{DeleteResult, UpdateResult},
    Client, Collection, Database,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, info};

use crate::types::{Result, RosterError};

/// Trait for schemas that provide a `$jsonSchema` validator
pub trait IntoValidator {
    fn into_validator() -> Document;
}

/// MongoDB client wrapper
#[derive(Clone)]
pub struct MongoClient {
    client: Client,
    db_name: String,
}

impl MongoClient {
    /// Connect to MongoDB and verify the server is reachable
    pub async fn new(uri: &str, db_name: &str) -> Result<Self> {
        info!("Connecting to MongoDB at {}", uri);

        // Use serverSelectionTimeoutMS to avoid hanging on unreachable MongoDB
        let timeout_uri = if uri.contains('?') {
            format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        } else {
            format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        };

        let client = Client::with_uri_str(&timeout_uri)
            .await
            .map_err(|e| RosterError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        // Verify connection with timeout
        client
            .database(db_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RosterError::Database(format!("MongoDB ping failed: {}", e)))?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            client,
            db_name: db_name.to_string(),
        })
    }

    /// Get a typed collection with its validator applied
    pub async fn collection<T>(&self, name: &str) -> Result<MongoCollection<T>>
    where
        T: Serialize + DeserializeOwned + Unpin + Send + Sync + IntoValidator,
    {
        MongoCollection::new(&self.client, &self.db_name, name).await
    }

    /// Get the raw MongoDB client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get the database name
    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

/// Typed MongoDB collection with a schema validator attached
#[derive(Debug, Clone)]
pub struct MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    inner: Collection<T>,
}

impl<T> MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync + IntoValidator,
{
    /// Create a new collection handle, ensuring the validator is in place
    pub async fn new(client: &Client, db_name: &str, collection_name: &str) -> Result<Self> {
        let db = client.database(db_name);

        Self::apply_validator(&db, collection_name).await?;

        let collection = db.collection::<T>(collection_name);
        Ok(MongoCollection { inner: collection })
    }

    /// Attach the schema validator to the collection
    ///
    /// Explicit existence check followed by a branch: `collMod` on an
    /// existing collection, `create` with the validator otherwise. A lost
    /// race between the check and the branch would surface as a command
    /// error; initialization runs once at startup with a single writer.
    async fn apply_validator(db: &Database, collection_name: &str) -> Result<()> {
        let validator = T::into_validator();

        let existing = db
            .list_collection_names()
            .await
            .map_err(|e| RosterError::Database(format!("Failed to list collections: {}", e)))?;

        if existing.iter().any(|name| name == collection_name) {
            db.run_command(doc! {
                "collMod": collection_name,
                "validator": validator,
            })
            .await
            .map_err(|e| {
                RosterError::Database(format!(
                    "Failed to update validator on '{}': {}",
                    collection_name, e
                ))
            })?;

            info!("Updated validator on collection '{}'", collection_name);
        } else {
            db.create_collection(collection_name)
                .validator(validator)
                .await
                .map_err(|e| {
                    RosterError::Database(format!(
                        "Failed to create collection '{}': {}",
                        collection_name, e
                    ))
                })?;

            info!("Created collection '{}' with validator", collection_name);
        }

        Ok(())
    }

    /// Insert a document, returning the store-assigned ID
    pub async fn insert_one(&self, item: T) -> Result<ObjectId> {
        let result = self
            .inner
            .insert_one(item)
            .await
            .map_err(|e| RosterError::Database(format!("Insert failed: {}", e)))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RosterError::Database("Failed to get inserted ID".into()))
    }

    /// Find one document by filter
    pub async fn find_one(&self, filter: Document) -> Result<Option<T>> {
        self.inner
            .find_one(filter)
            .await
            .map_err(|e| RosterError::Database(format!("Find failed: {}", e)))
    }

    /// Find many documents by filter
    pub async fn find_many(&self, filter: Document) -> Result<Vec<T>> {
        use futures_util::StreamExt;

        let cursor = self
            .inner
            .find(filter)
            .await
            .map_err(|e| RosterError::Database(format!("Find failed: {}", e)))?;

        let results: Vec<T> = cursor
            .filter_map(|doc| async {
                match doc {
                    Ok(d) => Some(d),
                    Err(e) => {
                        error!("Error reading document: {}", e);
                        None
                    }
                }
            })
            .collect()
            .await;

        Ok(results)
    }

    /// Update one document
    pub async fn update_one(
        &self,
        filter: Document,
        update: impl Into<UpdateModifications>,
    ) -> Result<UpdateResult> {
        self.inner
            .update_one(filter, update.into())
            .await
            .map_err(|e| RosterError::Database(format!("Update failed: {}", e)))
    }

    /// Delete one document
    pub async fn delete_one(&self, filter: Document) -> Result<DeleteResult> {
        self.inner
            .delete_one(filter)
            .await
            .map_err(|e| RosterError::Database(format!("Delete failed: {}", e)))
    }

    /// Get the underlying collection for advanced operations
    pub fn inner(&self) -> &Collection<T> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    // Connection and validator behavior is covered by the live-store
    // integration tests in tests/live_mongo.rs (run with --ignored).
}
