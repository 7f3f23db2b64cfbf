//! Configuration loading and management for the Stay Engine.
//!
//! This module loads the hotel metadata and room catalog from YAML files and
//! reads the server binary's runtime settings from the environment.
//!
//! # Example
//!
//! ```no_run
//! use stay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hotel").unwrap();
//! println!("Loaded hotel: {}", config.hotel().name);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{DEFAULT_CONFIG_DIR, DEFAULT_PORT, ServerSettings};
pub use types::{HotelConfig, HotelMetadata, RoomsConfig};
