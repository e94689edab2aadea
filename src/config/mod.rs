//! Configuration loading and management for the compensation engine.
//!
//! This module loads the engine's YAML configuration: the currency format
//! used on generated documents and the years the proration engine accepts.
//! Policy percentages are not configurable; they live with the policies.
//!
//! # Example
//!
//! ```no_run
//! use compensation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Years accepted from {}", config.year_bounds().min_year);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::EngineConfig;
