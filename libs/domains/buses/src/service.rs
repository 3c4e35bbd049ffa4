//! Bus Service - Business logic layer

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{BusError, BusResult};
use crate::filter::{BusChanges, BusFilter};
use crate::models::{Bus, CreateBus};
use crate::repository::BusRepository;

/// Deadline applied to the store work of a single operation
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// Confirmation returned by a successful delete
pub const DELETED_MESSAGE: &str = "Bus deleted successfully!";

/// Bus service providing the CRUD operations
///
/// Every operation bounds its store calls by the configured deadline. An
/// expired deadline surfaces as a database error.
pub struct BusService<R: BusRepository> {
    repository: Arc<R>,
    store_timeout: Duration,
}

impl<R: BusRepository> BusService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Override the per-operation store deadline
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn store_timeout(&self) -> Duration {
        self.store_timeout
    }

    async fn within_deadline<T>(&self, work: impl Future<Output = BusResult<T>>) -> BusResult<T> {
        tokio::time::timeout(self.store_timeout, work)
            .await
            .map_err(|_| {
                tracing::warn!(timeout = ?self.store_timeout, "Store operation timed out");
                BusError::Database(format!(
                    "store operation did not complete within {:?}",
                    self.store_timeout
                ))
            })?
    }

    /// Create a new bus with a generated id
    #[instrument(skip(self, input), fields(plate = %input.plate))]
    pub async fn create_bus(&self, input: CreateBus) -> BusResult<Bus> {
        input
            .validate()
            .map_err(|e| BusError::Validation(e.to_string()))?;

        let bus = Bus::new(input);
        self.within_deadline(self.repository.insert(bus)).await
    }

    /// Find all buses matching the filter
    #[instrument(skip(self))]
    pub async fn search_buses(&self, filter: BusFilter) -> BusResult<Vec<Bus>> {
        self.within_deadline(self.repository.find(filter)).await
    }

    /// Get a bus by id
    #[instrument(skip(self))]
    pub async fn get_bus(&self, id: Uuid) -> BusResult<Bus> {
        self.within_deadline(self.repository.find_by_id(id))
            .await?
            .ok_or(BusError::NotFound(id))
    }

    /// Apply a partial update and return the bus as stored afterwards
    #[instrument(skip(self))]
    pub async fn update_bus(&self, id: Uuid, changes: BusChanges) -> BusResult<Bus> {
        self.within_deadline(async {
            let matched = self.repository.update(id, changes).await?;
            if matched == 0 {
                return Err(BusError::NotFound(id));
            }

            self.repository.find_by_id(id).await?.ok_or_else(|| {
                BusError::Database(format!("bus {id} disappeared after update"))
            })
        })
        .await
    }

    /// Delete a bus
    #[instrument(skip(self))]
    pub async fn delete_bus(&self, id: Uuid) -> BusResult<()> {
        let deleted = self.within_deadline(self.repository.delete(id)).await?;
        if deleted < 1 {
            return Err(BusError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: BusRepository> Clone for BusService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            store_timeout: self.store_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UpdateBus;
    use crate::repository::MockBusRepository;
    use mockall::predicate::eq;

    fn sample_bus() -> Bus {
        Bus {
            id: Uuid::now_v7(),
            plate: "HP01AB1234".into(),
            number: "101".into(),
            bus_type: "express".into(),
            route: vec![1, 2, 3],
        }
    }

    #[tokio::test]
    async fn test_create_bus_assigns_id_and_persists_route() {
        let mut repo = MockBusRepository::new();
        repo.expect_insert()
            .withf(|bus| bus.plate == "HP01" && bus.route == vec![4, 5])
            .times(1)
            .returning(|bus| Ok(bus));

        let service = BusService::new(repo);
        let bus = service
            .create_bus(CreateBus {
                plate: "HP01".into(),
                number: "7".into(),
                bus_type: Some("ordinary".into()),
                route: Some(vec![4, 5]),
            })
            .await
            .unwrap();

        assert!(!bus.id.is_nil());
        assert_eq!(bus.route, vec![4, 5]);
    }

    #[tokio::test]
    async fn test_create_bus_rejects_missing_fields() {
        let mut repo = MockBusRepository::new();
        repo.expect_insert().never();

        let service = BusService::new(repo);
        let result = service.create_bus(CreateBus::default()).await;

        assert!(matches!(result, Err(BusError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_bus_not_found() {
        let mut repo = MockBusRepository::new();
        let id = Uuid::now_v7();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = BusService::new(repo);
        let result = service.get_bus(id).await;

        assert!(matches!(result, Err(BusError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_search_passes_filter_through() {
        let mut repo = MockBusRepository::new();
        let expected = BusFilter::new().number("101");
        let bus = sample_bus();
        let returned = vec![bus.clone()];
        repo.expect_find()
            .with(eq(expected.clone()))
            .returning(move |_| Ok(returned.clone()));

        let service = BusService::new(repo);
        let buses = service.search_buses(expected).await.unwrap();

        assert_eq!(buses, vec![bus]);
    }

    #[tokio::test]
    async fn test_update_bus_refetches_stored_document() {
        let mut repo = MockBusRepository::new();
        let mut stored = sample_bus();
        let id = stored.id;
        stored.bus_type = "ordinary".into();

        repo.expect_update()
            .withf(move |update_id, changes| *update_id == id && !changes.is_empty())
            .returning(|_, _| Ok(1));
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored.clone())));

        let service = BusService::new(repo);
        let changes = BusChanges::from(UpdateBus {
            bus_type: Some("ordinary".into()),
            ..Default::default()
        });
        let bus = service.update_bus(id, changes).await.unwrap();

        assert_eq!(bus.bus_type, "ordinary");
        assert_eq!(bus.plate, "HP01AB1234");
    }

    #[tokio::test]
    async fn test_update_bus_not_found() {
        let mut repo = MockBusRepository::new();
        repo.expect_update().returning(|_, _| Ok(0));
        repo.expect_find_by_id().never();

        let service = BusService::new(repo);
        let result = service
            .update_bus(Uuid::now_v7(), BusChanges::default())
            .await;

        assert!(matches!(result, Err(BusError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_bus_refetch_miss_is_server_error() {
        let mut repo = MockBusRepository::new();
        repo.expect_update().returning(|_, _| Ok(1));
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = BusService::new(repo);
        let result = service
            .update_bus(Uuid::now_v7(), BusChanges::default())
            .await;

        assert!(matches!(result, Err(BusError::Database(_))));
    }

    #[tokio::test]
    async fn test_delete_bus() {
        let mut repo = MockBusRepository::new();
        let id = Uuid::now_v7();
        repo.expect_delete().with(eq(id)).times(1).returning(|_| Ok(1));

        let service = BusService::new(repo);
        assert!(service.delete_bus(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_bus_not_found() {
        let mut repo = MockBusRepository::new();
        repo.expect_delete().returning(|_| Ok(0));

        let service = BusService::new(repo);
        let result = service.delete_bus(Uuid::now_v7()).await;

        assert!(matches!(result, Err(BusError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut repo = MockBusRepository::new();
        repo.expect_find()
            .returning(|_| Err(BusError::Database("connection refused".into())));

        let service = BusService::new(repo);
        let result = service.search_buses(BusFilter::new()).await;

        assert!(matches!(result, Err(BusError::Database(msg)) if msg == "connection refused"));
    }

    #[test]
    fn test_default_store_timeout() {
        let service = BusService::new(MockBusRepository::new());
        assert_eq!(service.store_timeout(), DEFAULT_STORE_TIMEOUT);

        let service = service.with_store_timeout(Duration::from_secs(2));
        assert_eq!(service.store_timeout(), Duration::from_secs(2));
    }
}
