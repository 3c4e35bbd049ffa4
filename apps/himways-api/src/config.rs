use std::time::Duration;

use core_config::{AppInfo, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_buses::DEFAULT_STORE_TIMEOUT;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Deadline for the store work of one request (STORE_TIMEOUT_SECS)
    pub store_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let store_timeout_secs =
            env_parse_or("STORE_TIMEOUT_SECS", DEFAULT_STORE_TIMEOUT.as_secs())?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            store_timeout: Duration::from_secs(store_timeout_secs),
        })
    }
}
