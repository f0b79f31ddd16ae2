use crate::error::AppError;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, FindOptions},
    Client as MongoClient, Database,
};
use std::time::Duration;

/// Persistence adapter for the inquiry store.
///
/// The underlying client connects lazily, so construction succeeds even
/// when MongoDB is unreachable and the process can still serve its
/// diagnostic routes. Operations fail once the server selection timeout
/// elapses.
#[derive(Clone)]
pub struct InquiryDb {
    client: MongoClient,
    db: Database,
}

impl InquiryDb {
    pub async fn connect(
        uri: &str,
        database: &str,
        server_selection_timeout: Duration,
    ) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Initializing MongoDB client");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB URI {}: {}", uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        options.server_selection_timeout = Some(server_selection_timeout);

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to initialize MongoDB client for {}: {}", uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db.list_collection_names(None).await.map_err(|e| {
            tracing::error!("Failed to list collection names: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }

    /// Insert a single document and return its generated identifier as a
    /// hex string.
    pub async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, AppError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert document into {}: {}", collection, e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };
        Ok(id)
    }

    /// Fetch up to `limit` documents matching `filter`, in natural order.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let find_options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query {}: {}", collection, e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect documents from {}: {}", collection, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        Ok(documents)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
