//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the hotel
//! catalog from YAML files.

use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Room;

use super::types::{HotelConfig, HotelMetadata, RoomsConfig};

/// Loads and provides access to the hotel configuration.
///
/// # Directory Structure
///
/// ```text
/// config/hotel/
/// ├── hotel.yaml   # Hotel metadata
/// └── rooms.yaml   # Room catalog
/// ```
///
/// # Example
///
/// ```no_run
/// use stay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hotel").unwrap();
/// let room = loader.get_room("1").unwrap();
/// println!("{} sleeps {}", room.name, room.capacity);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: HotelConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The room catalog repeats an id, or lists a room with no capacity
    ///   or a negative price
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let hotel_path = path.join("hotel.yaml");
        let metadata = Self::load_yaml::<HotelMetadata>(&hotel_path)?;

        let rooms_path = path.join("rooms.yaml");
        let rooms_config = Self::load_yaml::<RoomsConfig>(&rooms_path)?;
        Self::check_rooms(&rooms_path, &rooms_config.rooms)?;

        debug!(
            hotel = %metadata.name,
            rooms = rooms_config.rooms.len(),
            "Loaded hotel configuration"
        );

        Ok(Self {
            config: HotelConfig::new(metadata, rooms_config.rooms),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects catalogs the calculator could not price.
    fn check_rooms(path: &Path, rooms: &[Room]) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let mut seen = HashSet::new();
        for room in rooms {
            if !seen.insert(room.id.as_str()) {
                return Err(parse_error(format!("duplicate room id '{}'", room.id)));
            }
            if room.capacity == 0 {
                return Err(parse_error(format!(
                    "room '{}' must have a capacity of at least 1",
                    room.id
                )));
            }
            if room.price < Decimal::ZERO {
                return Err(parse_error(format!(
                    "room '{}' has a negative price",
                    room.id
                )));
            }
        }
        Ok(())
    }

    /// Returns the underlying hotel configuration.
    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    /// Returns the hotel metadata.
    pub fn hotel(&self) -> &HotelMetadata {
        self.config.hotel()
    }

    /// Returns all rooms in catalog order.
    pub fn rooms(&self) -> &[Room] {
        self.config.rooms()
    }

    /// Gets a room by its id.
    ///
    /// Returns `RoomNotFound` when the catalog has no such room.
    pub fn get_room(&self, room_id: &str) -> EngineResult<&Room> {
        self.config
            .room(room_id)
            .ok_or_else(|| EngineError::RoomNotFound {
                room_id: room_id.to_string(),
            })
    }
}
