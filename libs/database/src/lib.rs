//! Database connectors for the HimWays services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client configuration, connection and health checks
//! - `config` - `core_config::FromEnv` support for the connection settings
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "HimWays");
//! let client = connect_from_config(&config).await?;
//! let buses = client.database(config.database()).collection::<Document>("Bus");
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
