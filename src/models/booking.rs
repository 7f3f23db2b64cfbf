//! Booking record and related types.
//!
//! This is the record exchanged with the booking store. Field names follow
//! the store's camelCase JSON.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::compute_nights;

/// Lifecycle state of a booking.
///
/// Serialized as its plain text. A status the engine does not recognise is
/// kept verbatim so it goes back to the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    /// The booking is active.
    Confirmed,
    /// The booking was cancelled by the guest or the hotel.
    Cancelled,
    /// Any other status text, as stored.
    Other(String),
}

impl BookingStatus {
    /// Returns the status text as stored.
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Other(status) => status,
        }
    }
}

impl From<String> for BookingStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Confirmed" => BookingStatus::Confirmed,
            "Cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Other(status),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

/// How the guest intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Credit card.
    #[default]
    CreditCard,
    /// Debit card.
    DebitCard,
    /// Unified Payments Interface.
    Upi,
    /// Bank transfer through net banking.
    NetBanking,
    /// Settled at the front desk.
    PayAtHotel,
}

/// A room booking as stored by the persistence collaborator.
///
/// # Example
///
/// ```
/// use stay_engine::models::{Booking, BookingStatus};
///
/// let json = r#"{
///     "id": "b1",
///     "userId": "u1",
///     "roomId": "3",
///     "roomName": "Royal Suite",
///     "checkIn": "2024-06-01",
///     "checkOut": "2024-06-05",
///     "guests": 2,
///     "totalPrice": 60000,
///     "pricePerNight": 15000,
///     "status": "Confirmed",
///     "paymentMethod": "upi",
///     "bookedAt": "2024-05-20T10:00:00Z"
/// }"#;
///
/// let booking: Booking = serde_json::from_str(json).unwrap();
/// assert_eq!(booking.status, BookingStatus::Confirmed);
/// assert_eq!(booking.nights(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Identifier assigned by the store; absent on records not yet saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The guest who owns the booking.
    pub user_id: String,
    /// The booked room.
    pub room_id: String,
    /// The room's display name at booking time.
    pub room_name: String,
    /// The room's image at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_image: Option<String>,
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Number of guests.
    pub guests: u32,
    /// Total price for the stay.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    /// Nightly price agreed at booking time. Records from the quick-booking
    /// page carry only a total.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_per_night: Option<Decimal>,
    /// Booking status.
    pub status: BookingStatus,
    /// Payment method tag.
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// When the booking was placed, if the store recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> u32 {
        compute_nights(self.check_in, self.check_out)
    }

    /// Returns true if the booking is confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}
