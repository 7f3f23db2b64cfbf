//! Configuration types for the hotel catalog.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::Room;

/// Metadata about the hotel.
#[derive(Debug, Clone, Deserialize)]
pub struct HotelMetadata {
    /// The hotel's display name.
    pub name: String,
    /// ISO 4217 code prices are quoted in (e.g., "INR").
    pub currency: String,
    /// Standard check-in time, for display (e.g., "14:00").
    pub check_in_time: String,
    /// Standard check-out time, for display (e.g., "11:00").
    pub check_out_time: String,
}

/// Room catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomsConfig {
    /// The rooms, in display order.
    pub rooms: Vec<Room>,
}

/// The complete hotel configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct HotelConfig {
    metadata: HotelMetadata,
    rooms: Vec<Room>,
    index: HashMap<String, usize>,
}

impl HotelConfig {
    /// Creates a new HotelConfig from its component parts.
    ///
    /// Room ids are assumed unique; the loader checks this before calling.
    pub fn new(metadata: HotelMetadata, rooms: Vec<Room>) -> Self {
        let index = rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (room.id.clone(), i))
            .collect();
        Self {
            metadata,
            rooms,
            index,
        }
    }

    /// Returns the hotel metadata.
    pub fn hotel(&self) -> &HotelMetadata {
        &self.metadata
    }

    /// Returns all rooms in catalog order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns the room with the given id, if any.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.index.get(id).map(|&i| &self.rooms[i])
    }
}
