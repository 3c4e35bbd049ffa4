use async_trait::async_trait;
use uuid::Uuid;

use crate::error::BusResult;
use crate::filter::{BusChanges, BusFilter};
use crate::models::Bus;

/// Storage operations for buses
///
/// Implementations report raw store outcomes (match and delete counts);
/// mapping those onto not-found errors is left to the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusRepository: Send + Sync {
    /// Insert a new bus document
    async fn insert(&self, bus: Bus) -> BusResult<Bus>;

    /// Get a bus by id
    async fn find_by_id(&self, id: Uuid) -> BusResult<Option<Bus>>;

    /// Find all buses matching the filter, in store order
    async fn find(&self, filter: BusFilter) -> BusResult<Vec<Bus>>;

    /// Apply the changes to the bus with the given id, returning the number
    /// of documents matched
    async fn update(&self, id: Uuid, changes: BusChanges) -> BusResult<u64>;

    /// Delete the bus with the given id, returning the number of documents removed
    async fn delete(&self, id: Uuid) -> BusResult<u64>;
}
