//! MongoDB repository tests
//!
//! These start a MongoDB container through testcontainers and need a local
//! Docker daemon, so they are ignored by default:
//!
//! ```sh
//! cargo test -p domain_buses --test mongodb_test -- --ignored
//! ```

use domain_buses::*;
use test_utils::{TestDataBuilder, TestMongo};
use uuid::Uuid;

fn repository(mongo: &TestMongo, test_name: &str) -> (MongoBusRepository, TestDataBuilder) {
    let builder = TestDataBuilder::from_test_name(test_name);
    let db = mongo.database(&builder.database_name());
    (MongoBusRepository::new(&db), builder)
}

fn new_bus(builder: &TestDataBuilder, suffix: &str, bus_type: &str) -> Bus {
    Bus::new(CreateBus {
        plate: builder.plate(suffix),
        number: builder.number(0),
        bus_type: Some(bus_type.to_string()),
        route: Some(vec![1, 2, 3]),
    })
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_and_find_by_id() {
    let mongo = TestMongo::new().await;
    let (repo, builder) = repository(&mongo, "insert_and_find_by_id");

    let bus = repo.insert(new_bus(&builder, "a", "express")).await.unwrap();
    let found = repo.find_by_id(bus.id).await.unwrap();

    assert_eq!(found, Some(bus));
    assert_eq!(repo.find_by_id(Uuid::now_v7()).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_with_filter() {
    let mongo = TestMongo::new().await;
    let (repo, builder) = repository(&mongo, "find_with_filter");

    let express = repo.insert(new_bus(&builder, "a", "express")).await.unwrap();
    repo.insert(new_bus(&builder, "b", "ordinary")).await.unwrap();

    let all = repo.find(BusFilter::new()).await.unwrap();
    assert_eq!(all.len(), 2);

    let filtered = repo
        .find(BusFilter::new().number(builder.number(0)).bus_type("express"))
        .await
        .unwrap();
    assert_eq!(filtered, vec![express]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_sets_only_given_fields() {
    let mongo = TestMongo::new().await;
    let (repo, builder) = repository(&mongo, "update_sets_only_given_fields");

    let bus = repo.insert(new_bus(&builder, "a", "express")).await.unwrap();
    let changes = BusChanges::from(UpdateBus {
        bus_type: Some("ordinary".into()),
        ..Default::default()
    });

    assert_eq!(repo.update(bus.id, changes).await.unwrap(), 1);

    let stored = repo.find_by_id(bus.id).await.unwrap().unwrap();
    assert_eq!(stored.bus_type, "ordinary");
    assert_eq!(stored.plate, bus.plate);
    assert_eq!(stored.route, bus.route);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_reports_matches() {
    let mongo = TestMongo::new().await;
    let (repo, builder) = repository(&mongo, "update_reports_matches");

    let bus = repo.insert(new_bus(&builder, "a", "express")).await.unwrap();

    assert_eq!(repo.update(bus.id, BusChanges::default()).await.unwrap(), 1);
    assert_eq!(
        repo.update(Uuid::now_v7(), BusChanges::default()).await.unwrap(),
        0
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_counts() {
    let mongo = TestMongo::new().await;
    let (repo, builder) = repository(&mongo, "delete_counts");

    let bus = repo.insert(new_bus(&builder, "a", "express")).await.unwrap();

    assert_eq!(repo.delete(bus.id).await.unwrap(), 1);
    assert_eq!(repo.delete(bus.id).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_round_trip() {
    let mongo = TestMongo::new().await;
    let (repo, builder) = repository(&mongo, "service_round_trip");
    let service = BusService::new(repo);

    let bus = service
        .create_bus(CreateBus {
            plate: builder.plate("svc"),
            number: builder.number(3),
            bus_type: Some("express".into()),
            route: Some(vec![4, 2]),
        })
        .await
        .unwrap();

    assert_eq!(service.get_bus(bus.id).await.unwrap(), bus);

    service.delete_bus(bus.id).await.unwrap();
    assert!(matches!(
        service.get_bus(bus.id).await,
        Err(BusError::NotFound(_))
    ));
}
