pub mod app_config;
pub mod availability;
pub mod config;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, TelegramConfig};
pub use availability::{CycleSummary, PickupStatus, ProductAvailability};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{load_products, parse_products, ProductsFile, TrackedProduct};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read products file {path}: {source}")]
    ProductsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse products file: {0}")]
    ProductsFileParse(#[from] serde_yaml::Error),

    #[error("products validation error: {0}")]
    Validation(String),
}
