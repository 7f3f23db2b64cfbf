//! Request types for the Stay Engine API.
//!
//! Dates arrive as text and are parsed with [`parse_stay_date`], so a
//! front end that sends a full timestamp still gets calendar-date semantics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{BookingEdit, BookingForm, parse_stay_date};
use crate::error::EngineResult;
use crate::models::{Booking, PaymentMethod};

/// Request body for `POST /quote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// The room to price.
    pub room_id: String,
    /// Requested check-in date.
    pub check_in: String,
    /// Requested check-out date.
    pub check_out: String,
    /// Number of guests.
    pub guests: u32,
}

impl QuoteRequest {
    /// Parses the check-in and check-out dates.
    pub fn dates(&self) -> EngineResult<(NaiveDate, NaiveDate)> {
        parse_dates(&self.check_in, &self.check_out)
    }
}

/// Query string for `GET /date-bounds`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateBoundsQuery {
    /// The check-in currently chosen on the form, if any.
    #[serde(default)]
    pub check_in: Option<String>,
}

impl DateBoundsQuery {
    /// Parses the chosen check-in; an empty value counts as none chosen.
    pub fn check_in(&self) -> EngineResult<Option<NaiveDate>> {
        match self.check_in.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_stay_date("checkIn", value).map(Some),
        }
    }
}

/// Request body for `POST /bookings/draft`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBookingRequest {
    /// The guest placing the booking.
    pub user_id: String,
    /// The room to book.
    pub room_id: String,
    /// Requested check-in date.
    pub check_in: String,
    /// Requested check-out date.
    pub check_out: String,
    /// Number of guests.
    pub guests: u32,
    /// Chosen payment method; credit card when omitted.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl DraftBookingRequest {
    /// Converts the request into a [`BookingForm`].
    pub fn form(&self) -> EngineResult<BookingForm> {
        let (check_in, check_out) = parse_dates(&self.check_in, &self.check_out)?;
        Ok(BookingForm {
            check_in,
            check_out,
            guests: self.guests,
            payment_method: self.payment_method,
        })
    }
}

/// Request body for `POST /bookings/revise`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviseBookingRequest {
    /// The booking as currently stored.
    pub booking: Booking,
    /// New check-in date.
    pub check_in: String,
    /// New check-out date.
    pub check_out: String,
    /// New number of guests.
    pub guests: u32,
}

impl ReviseBookingRequest {
    /// Converts the request into a [`BookingEdit`].
    pub fn edit(&self) -> EngineResult<BookingEdit> {
        let (check_in, check_out) = parse_dates(&self.check_in, &self.check_out)?;
        Ok(BookingEdit {
            check_in,
            check_out,
            guests: self.guests,
        })
    }
}

fn parse_dates(check_in: &str, check_out: &str) -> EngineResult<(NaiveDate, NaiveDate)> {
    Ok((
        parse_stay_date("checkIn", check_in)?,
        parse_stay_date("checkOut", check_out)?,
    ))
}
