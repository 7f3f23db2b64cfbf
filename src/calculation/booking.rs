//! Booking record assembly for the create and edit flows.
//!
//! Both flows price the stay through [`validate_stay_request`], so a stored
//! `totalPrice` is always the calculator's figure.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult, StayValidationError};
use crate::models::{Booking, BookingStatus, PaymentMethod, Room, StayRequest};

use super::validation::validate_stay_request;

/// What a guest enters on the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    /// Requested check-in date.
    pub check_in: NaiveDate,
    /// Requested check-out date.
    pub check_out: NaiveDate,
    /// Number of guests.
    pub guests: u32,
    /// Chosen payment method.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// The fields a guest may change on an existing booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEdit {
    /// New check-in date.
    pub check_in: NaiveDate,
    /// New check-out date.
    pub check_out: NaiveDate,
    /// New number of guests.
    pub guests: u32,
}

/// Builds a confirmed, unsaved booking record for `room`.
///
/// # Arguments
///
/// * `room` - The room being booked; supplies price, capacity, name and image
/// * `user_id` - The guest placing the booking
/// * `form` - The guest's dates, guest count and payment method
/// * `booked_at` - Timestamp to record as the booking time
///
/// # Errors
///
/// Returns the [`StayValidationError`] for the stay when it cannot be booked.
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::{BookingForm, draft_booking};
/// use stay_engine::models::{BookingStatus, PaymentMethod, Room};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
///
/// let room = Room {
///     id: "3".to_string(),
///     name: "Royal Suite".to_string(),
///     room_type: "Suite".to_string(),
///     price: Decimal::new(15000, 0),
///     capacity: 4,
///     description: String::new(),
///     amenities: vec![],
///     image: None,
/// };
/// let form = BookingForm {
///     check_in: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     guests: 2,
///     payment_method: PaymentMethod::Upi,
/// };
///
/// let booking = draft_booking(&room, "u1", &form, Utc::now()).unwrap();
/// assert_eq!(booking.total_price, Decimal::new(30000, 0));
/// assert_eq!(booking.status, BookingStatus::Confirmed);
/// ```
pub fn draft_booking(
    room: &Room,
    user_id: &str,
    form: &BookingForm,
    booked_at: DateTime<Utc>,
) -> Result<Booking, StayValidationError> {
    let request = room.stay_request(form.check_in, form.check_out, form.guests);
    let quote = validate_stay_request(&request)?;

    Ok(Booking {
        id: None,
        user_id: user_id.to_string(),
        room_id: room.id.clone(),
        room_name: room.name.clone(),
        room_image: room.image.clone(),
        check_in: form.check_in,
        check_out: form.check_out,
        guests: form.guests,
        total_price: quote.total_price(),
        price_per_night: Some(room.price),
        status: BookingStatus::Confirmed,
        payment_method: form.payment_method,
        booked_at: Some(booked_at),
    })
}

/// Re-prices an existing booking for new dates or guest count.
///
/// The nightly price stays the one stored on the booking; the room is only
/// consulted for its capacity. A booking with no stored nightly price is
/// priced at the room's current rate, and that rate is recorded on the
/// result. Every other field of the booking is kept as it came in.
///
/// # Errors
///
/// Returns `RoomMismatch` when `room` is not the booked room, and
/// `InvalidStay` when the edited stay fails validation.
pub fn revise_booking(booking: &Booking, room: &Room, edit: &BookingEdit) -> EngineResult<Booking> {
    if booking.room_id != room.id {
        return Err(EngineError::RoomMismatch {
            booking_room_id: booking.room_id.clone(),
            room_id: room.id.clone(),
        });
    }

    let price_per_night = booking.price_per_night.unwrap_or(room.price);
    let request = StayRequest {
        check_in_date: edit.check_in,
        check_out_date: edit.check_out,
        guest_count: edit.guests,
        price_per_night,
        room_capacity: room.capacity,
    };
    let quote = validate_stay_request(&request)?;

    Ok(Booking {
        check_in: edit.check_in,
        check_out: edit.check_out,
        guests: edit.guests,
        total_price: quote.total_price(),
        price_per_night: Some(price_per_night),
        ..booking.clone()
    })
}
