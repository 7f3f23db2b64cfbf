//! Core data models for the Stay Engine.
//!
//! This module contains the stay request/quote pair the calculator works on
//! and the room and booking records exchanged with the booking store.

mod booking;
mod room;
mod stay;

pub use booking::{Booking, BookingStatus, PaymentMethod};
pub use room::{AcPreference, Room, RoomFilter};
pub use stay::{StayQuote, StayRequest};
