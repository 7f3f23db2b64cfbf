//! Calculation logic for the Stay Engine.
//!
//! This module contains the stay calculator used by every booking surface:
//! night counting on calendar dates, totals, request validation and quoting,
//! minimum selectable dates with an injected clock, and the assembly of
//! booking records for the create and edit flows.

mod booking;
mod date_bounds;
mod nights;
mod total;
mod validation;

pub use booking::{BookingEdit, BookingForm, draft_booking, revise_booking};
pub use date_bounds::{
    Clock, DateBounds, FixedClock, SystemClock, date_bounds, min_check_in_date,
    min_check_out_date,
};
pub use nights::{compute_nights, parse_stay_date};
pub use total::compute_total;
pub use validation::{quote_stay, validate_stay_request};
