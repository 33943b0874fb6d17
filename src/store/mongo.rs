use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Document, doc};
use mongodb::{Client, Collection, Cursor, Database};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::{APPOINTMENTS_COLLECTION, RecordStore, WINDOWS_COLLECTION};
use crate::error::StoreError;
use crate::models::appointment::Appointment;
use crate::models::availability::AvailabilityWindow;

/// MongoDB-backed record store.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await.map_err(backend)?;
        Ok(MongoStore {
            db: client.database(database),
        })
    }

    fn windows(&self) -> Collection<Document> {
        self.db.collection(WINDOWS_COLLECTION)
    }

    fn appointments(&self) -> Collection<Document> {
        self.db.collection(APPOINTMENTS_COLLECTION)
    }

    /// Drain a cursor, decoding row by row. A row the hosted store let in
    /// with missing or malformed fields is skipped with a warning instead
    /// of failing the whole read.
    async fn collect_rows<T: DeserializeOwned>(
        mut cursor: Cursor<Document>,
        collection: &str,
    ) -> Result<Vec<T>, StoreError> {
        let mut rows = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(backend)? {
            match bson::from_document::<T>(document) {
                Ok(row) => rows.push(row),
                Err(e) => tracing::warn!("skipping malformed {} row: {}", collection, e),
            }
        }
        Ok(rows)
    }
}

fn backend(e: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn select_windows(&self) -> Result<Vec<AvailabilityWindow>, StoreError> {
        let cursor = self.windows().find(doc! {}).await.map_err(backend)?;
        Self::collect_rows(cursor, WINDOWS_COLLECTION).await
    }

    async fn select_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        // created_at is stored as an RFC 3339 string, so a lexicographic
        // sort is chronological.
        let cursor = self
            .appointments()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(backend)?;
        Self::collect_rows(cursor, APPOINTMENTS_COLLECTION).await
    }

    async fn insert_appointment(&self, appointment: &Appointment) -> Result<(), StoreError> {
        let document = bson::to_document(appointment).map_err(backend)?;
        self.appointments()
            .insert_one(document)
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = self
            .appointments()
            .delete_one(doc! { "id": id.to_string() })
            .await
            .map_err(backend)?;
        Ok(result.deleted_count > 0)
    }
}
