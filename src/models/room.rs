//! Room model and catalog filter.
//!
//! Only the fields the catalog and the calculator consume are modeled.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::StayRequest;

/// A bookable room from the hotel catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room.
    pub id: String,
    /// Display name of the room.
    pub name: String,
    /// Room category (e.g., "Deluxe", "Suite").
    #[serde(rename = "type")]
    pub room_type: String,
    /// Nightly price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Marketing description.
    #[serde(default)]
    pub description: String,
    /// Amenities offered (e.g., "AC", "WiFi").
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Image URL shown alongside the room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Room {
    /// Returns true if the room lists the given amenity (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use stay_engine::models::Room;
    /// use rust_decimal::Decimal;
    ///
    /// let room = Room {
    ///     id: "1".to_string(),
    ///     name: "Garden View".to_string(),
    ///     room_type: "Deluxe".to_string(),
    ///     price: Decimal::new(4500, 0),
    ///     capacity: 2,
    ///     description: String::new(),
    ///     amenities: vec!["AC".to_string(), "WiFi".to_string()],
    ///     image: None,
    /// };
    /// assert!(room.has_amenity("wifi"));
    /// assert!(!room.has_amenity("Minibar"));
    /// ```
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|a| a.eq_ignore_ascii_case(amenity))
    }

    /// Builds the [`StayRequest`] for booking this room over the given dates.
    pub fn stay_request(
        &self,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        guest_count: u32,
    ) -> StayRequest {
        StayRequest {
            check_in_date,
            check_out_date,
            guest_count,
            price_per_night: self.price,
            room_capacity: self.capacity,
        }
    }
}

/// Whether a listing should include rooms with air conditioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcPreference {
    /// No preference.
    #[default]
    All,
    /// Only rooms listing the "AC" amenity.
    Yes,
    /// Only rooms without it.
    No,
}

/// Criteria for narrowing the room catalog.
///
/// Every criterion is optional; an empty filter matches every room. A room
/// type of `"all"` is treated as no type criterion.
///
/// # Examples
///
/// ```
/// use stay_engine::models::{AcPreference, Room, RoomFilter};
/// use rust_decimal::Decimal;
///
/// let room = Room {
///     id: "4".to_string(),
///     name: "Heritage Room".to_string(),
///     room_type: "Standard".to_string(),
///     price: Decimal::new(2200, 0),
///     capacity: 2,
///     description: String::new(),
///     amenities: vec!["WiFi".to_string()],
///     image: None,
/// };
///
/// let filter = RoomFilter {
///     max_price: Some(Decimal::new(3000, 0)),
///     ac: AcPreference::No,
///     ..RoomFilter::default()
/// };
/// assert!(filter.matches(&room));
/// assert!(!RoomFilter { min_capacity: Some(3), ..filter }.matches(&room));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomFilter {
    /// Highest nightly price to include.
    #[serde(default)]
    pub max_price: Option<Decimal>,
    /// Smallest capacity to include.
    #[serde(default)]
    pub min_capacity: Option<u32>,
    /// Exact room category to include.
    #[serde(default, rename = "type")]
    pub room_type: Option<String>,
    /// Air conditioning preference.
    #[serde(default)]
    pub ac: AcPreference,
}

impl RoomFilter {
    /// Returns true if `room` meets every criterion of this filter.
    pub fn matches(&self, room: &Room) -> bool {
        if self.max_price.is_some_and(|max| room.price > max) {
            return false;
        }
        if self.min_capacity.is_some_and(|min| room.capacity < min) {
            return false;
        }
        if self
            .room_type
            .as_deref()
            .is_some_and(|room_type| room_type != "all" && room.room_type != room_type)
        {
            return false;
        }
        match self.ac {
            AcPreference::All => true,
            AcPreference::Yes => room.has_amenity("AC"),
            AcPreference::No => !room.has_amenity("AC"),
        }
    }

    /// Returns the rooms that match, in catalog order.
    pub fn apply<'a>(&self, rooms: &'a [Room]) -> Vec<&'a Room> {
        rooms.iter().filter(|room| self.matches(room)).collect()
    }
}
