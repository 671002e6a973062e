//! Configuration for Items API

use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo};
use std::path::PathBuf;

pub use core_config::Environment;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3001;

/// Document used when `ITEMS_DATA_PATH` is not set
pub const DEFAULT_DATA_PATH: &str = "data/items.json";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `APP_ENV` only when set to a known value; gates error stacks
    pub explicit_environment: Option<Environment>,
    pub data_path: PathBuf,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env_with_port(DEFAULT_PORT)?;
        let data_path = PathBuf::from(env_or_default("ITEMS_DATA_PATH", DEFAULT_DATA_PATH));

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            explicit_environment: Environment::explicit_from_env(),
            data_path,
        })
    }
}
