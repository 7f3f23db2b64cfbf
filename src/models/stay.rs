//! Stay request and quote models.
//!
//! A [`StayRequest`] is built from whatever a booking form currently holds; a
//! [`StayQuote`] is the derived nights/price/validity figure for it. Neither is
//! ever persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::StayValidationError;

/// The inputs needed to price a candidate stay.
///
/// # Example
///
/// ```
/// use stay_engine::models::StayRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = StayRequest {
///     check_in_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     check_out_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
///     guest_count: 2,
///     price_per_night: Decimal::new(5000, 0),
///     room_capacity: 4,
/// };
/// assert_eq!(request.guest_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayRequest {
    /// The first night of the stay.
    pub check_in_date: NaiveDate,
    /// The morning the guest leaves.
    pub check_out_date: NaiveDate,
    /// The number of guests staying.
    pub guest_count: u32,
    /// The nightly price of the room.
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_night: Decimal,
    /// The maximum number of guests the room holds.
    pub room_capacity: u32,
}

/// The computed nights, price and validity for a [`StayRequest`].
///
/// Quotes are only produced by the calculator, so `total_price` is always
/// `nights * price_per_night` of the request they were computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    nights: u32,
    #[serde(with = "rust_decimal::serde::float")]
    total_price: Decimal,
    is_valid: bool,
    #[serde(
        serialize_with = "serialize_validation_error",
        skip_serializing_if = "Option::is_none"
    )]
    validation_error: Option<StayValidationError>,
}

impl StayQuote {
    pub(crate) fn valid(nights: u32, total_price: Decimal) -> Self {
        Self {
            nights,
            total_price,
            is_valid: true,
            validation_error: None,
        }
    }

    pub(crate) fn invalid(nights: u32, total_price: Decimal, error: StayValidationError) -> Self {
        Self {
            nights,
            total_price,
            is_valid: false,
            validation_error: Some(error),
        }
    }

    /// Number of nights in the stay.
    pub fn nights(&self) -> u32 {
        self.nights
    }

    /// Total price for all nights.
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// Whether the stay can be booked as requested.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The reason the stay cannot be booked, if any.
    pub fn validation_error(&self) -> Option<StayValidationError> {
        self.validation_error
    }
}

fn serialize_validation_error<S>(
    error: &Option<StayValidationError>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match error {
        Some(error) => {
            let mut state = serializer.serialize_struct("ValidationError", 2)?;
            state.serialize_field("code", error.code())?;
            state.serialize_field("message", &error.to_string())?;
            state.end()
        }
        None => serializer.serialize_none(),
    }
}
