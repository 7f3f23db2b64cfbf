//! Error types for the Stay Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`StayValidationError`] covers user-correctable problems with a stay
//! request; [`EngineError`] covers everything else (configuration, lookups,
//! unparseable input) and wraps stay validation failures when they need to
//! travel through the same `?` chain.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// A reason a stay request cannot be booked as entered.
///
/// These are recoverable input errors. Callers surface the message to the
/// guest and block submission until the input is corrected.
///
/// # Example
///
/// ```
/// use stay_engine::error::StayValidationError;
///
/// let error = StayValidationError::CapacityExceeded { guests: 5, capacity: 4 };
/// assert_eq!(error.code(), "CAPACITY_EXCEEDED");
/// assert_eq!(error.to_string(), "This room can accommodate maximum 4 guests");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StayValidationError {
    /// Check-out is not strictly after check-in.
    #[error("Check-out date must be after check-in date")]
    InvalidDateRange {
        /// The requested check-in date.
        check_in: NaiveDate,
        /// The requested check-out date.
        check_out: NaiveDate,
    },

    /// More guests were requested than the room holds.
    #[error("This room can accommodate maximum {capacity} guests")]
    CapacityExceeded {
        /// The requested number of guests.
        guests: u32,
        /// The room's capacity.
        capacity: u32,
    },

    /// A stay needs at least one guest.
    #[error("At least one guest is required")]
    InvalidGuestCount,

    /// The nightly price was negative.
    #[error("Price per night cannot be negative: {price}")]
    NegativePrice {
        /// The offending price.
        price: Decimal,
    },

    /// The stay's total does not fit in a decimal amount.
    #[error("Total price for {nights} nights at {price} per night is too large")]
    PriceOverflow {
        /// The number of nights.
        nights: u32,
        /// The nightly price.
        price: Decimal,
    },
}

impl StayValidationError {
    /// Returns a stable, machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            StayValidationError::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            StayValidationError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            StayValidationError::InvalidGuestCount => "INVALID_GUEST_COUNT",
            StayValidationError::NegativePrice { .. } => "NEGATIVE_PRICE",
            StayValidationError::PriceOverflow { .. } => "PRICE_OVERFLOW",
        }
    }
}

/// The main error type for the Stay Engine.
///
/// # Example
///
/// ```
/// use stay_engine::error::EngineError;
///
/// let error = EngineError::RoomNotFound {
///     room_id: "suite-9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Room not found: suite-9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No room with the given id exists in the catalog.
    #[error("Room not found: {room_id}")]
    RoomNotFound {
        /// The id that was looked up.
        room_id: String,
    },

    /// A booking was revised against a different room than the one it holds.
    #[error("Booking is for room '{booking_room_id}' but room '{room_id}' was supplied")]
    RoomMismatch {
        /// The room id stored on the booking.
        booking_room_id: String,
        /// The room id that was supplied.
        room_id: String,
    },

    /// A date field could not be parsed as an ISO-8601 date.
    #[error("Invalid date for '{field}': {value}")]
    InvalidDate {
        /// The field that held the date.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The stay request failed validation.
    #[error(transparent)]
    InvalidStay(#[from] StayValidationError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
