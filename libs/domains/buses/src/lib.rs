//! Buses Domain
//!
//! CRUD over the HimWays bus registry, stored in the `Bus` collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, envelope responses
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping, store deadline
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Filter    │  ← Search filter and partial-update builders
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_buses::{handlers, MongoBusRepository, BusService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("HimWays");
//!
//! let service = BusService::new(MongoBusRepository::new(&db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{BusError, BusResult, NOT_FOUND_MESSAGE};
pub use filter::{BusChanges, BusFilter};
pub use handlers::ApiDoc;
pub use models::{Bus, BusQuery, CreateBus, UpdateBus};
pub use self::mongodb::{BUS_COLLECTION, MongoBusRepository};
pub use repository::BusRepository;
pub use service::{BusService, DEFAULT_STORE_TIMEOUT, DELETED_MESSAGE};
