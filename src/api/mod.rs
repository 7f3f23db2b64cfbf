//! HTTP API module for the Stay Engine.
//!
//! This module provides the REST endpoints a booking front end calls to
//! list rooms, quote stays, get date bounds and assemble booking records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DateBoundsQuery, DraftBookingRequest, QuoteRequest, ReviseBookingRequest};
pub use response::{ApiError, ApiErrorResponse, QuoteResponse};
pub use state::AppState;
