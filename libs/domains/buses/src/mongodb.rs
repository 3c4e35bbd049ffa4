//! MongoDB implementation of the bus repository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::instrument;
use uuid::Uuid;

use crate::error::BusResult;
use crate::filter::{BusChanges, BusFilter, id_filter};
use crate::models::Bus;
use crate::repository::BusRepository;

/// Collection holding bus documents
pub const BUS_COLLECTION: &str = "Bus";

/// MongoDB-backed bus repository
#[derive(Clone)]
pub struct MongoBusRepository {
    collection: Collection<Bus>,
}

impl MongoBusRepository {
    /// Create a repository over the `Bus` collection of the given database
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, BUS_COLLECTION)
    }

    /// Create a repository over a custom collection name
    pub fn with_collection(db: &Database, name: &str) -> Self {
        Self {
            collection: db.collection(name),
        }
    }

    pub fn collection(&self) -> &Collection<Bus> {
        &self.collection
    }
}

#[async_trait]
impl BusRepository for MongoBusRepository {
    #[instrument(skip(self, bus), fields(bus_id = %bus.id))]
    async fn insert(&self, bus: Bus) -> BusResult<Bus> {
        self.collection.insert_one(&bus).await?;
        tracing::info!(bus_id = %bus.id, "Bus created successfully");
        Ok(bus)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> BusResult<Option<Bus>> {
        Ok(self.collection.find_one(id_filter(id)).await?)
    }

    #[instrument(skip(self))]
    async fn find(&self, filter: BusFilter) -> BusResult<Vec<Bus>> {
        let cursor = self.collection.find(filter.to_document()).await?;
        let buses: Vec<Bus> = cursor.try_collect().await?;
        tracing::debug!(count = buses.len(), "Bus search completed");
        Ok(buses)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: Uuid, changes: BusChanges) -> BusResult<u64> {
        // An empty $set is rejected by the server, so only check existence.
        if changes.is_empty() {
            return Ok(self.collection.count_documents(id_filter(id)).await?);
        }

        let result = self
            .collection
            .update_one(id_filter(id), changes.to_update_document())
            .await?;
        if result.matched_count > 0 {
            tracing::info!(bus_id = %id, "Bus updated successfully");
        }
        Ok(result.matched_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> BusResult<u64> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        if result.deleted_count > 0 {
            tracing::info!(bus_id = %id, "Bus deleted successfully");
        }
        Ok(result.deleted_count)
    }
}
