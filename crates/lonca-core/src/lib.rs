//! Canonical storefront types and application configuration shared by the
//! catalog, query, and CLI crates.

pub mod app_config;
pub mod config;
pub mod products;
pub mod vendors;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{
    family_key, DescriptionDetails, Product, ProductColor, ProductListResponse,
    DEFAULT_PRODUCT_NAME, DEFAULT_VENDOR_NAME,
};
pub use vendors::{vendor_slug, VendorSummary};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
