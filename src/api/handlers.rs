//! HTTP request handlers for the Stay Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DateBounds, date_bounds, draft_booking, quote_stay, revise_booking,
};
use crate::error::EngineError;
use crate::models::{Booking, Room, RoomFilter};

use super::request::{DateBoundsQuery, DraftBookingRequest, QuoteRequest, ReviseBookingRequest};
use super::response::{ApiError, ApiErrorResponse, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rooms", get(list_rooms_handler))
        .route("/rooms/:id", get(get_room_handler))
        .route("/quote", post(quote_handler))
        .route("/date-bounds", get(date_bounds_handler))
        .route("/bookings/draft", post(draft_booking_handler))
        .route("/bookings/revise", post(revise_booking_handler))
        .with_state(state)
}

/// Handler for GET /rooms.
///
/// Query parameters narrow the listing: `maxPrice`, `minCapacity`, `type`
/// and `ac` (`yes`, `no` or `all`).
async fn list_rooms_handler(
    State(state): State<AppState>,
    filter: Result<Query<RoomFilter>, QueryRejection>,
) -> Result<Json<Vec<Room>>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let Query(filter) = filter.map_err(|rejection| query_failure(correlation_id, rejection))?;
    let rooms: Vec<Room> = filter
        .apply(state.config().rooms())
        .into_iter()
        .cloned()
        .collect();

    info!(
        correlation_id = %correlation_id,
        matched = rooms.len(),
        "Rooms listed"
    );
    Ok(Json(rooms))
}

/// Handler for GET /rooms/:id.
async fn get_room_handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<Room>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let room = state
        .config()
        .get_room(&room_id)
        .map_err(|err| engine_failure(correlation_id, err))?;
    Ok(Json(room.clone()))
}

/// Handler for POST /quote.
///
/// Invalid stays are not errors here: the quote comes back with
/// `isValid: false` and the reason, so a form can show it inline.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let Json(request) = payload.map_err(|rejection| json_failure(correlation_id, rejection))?;
    let room = state
        .config()
        .get_room(&request.room_id)
        .map_err(|err| engine_failure(correlation_id, err))?;
    let (check_in, check_out) = request
        .dates()
        .map_err(|err| engine_failure(correlation_id, err))?;

    let quote = quote_stay(&room.stay_request(check_in, check_out, request.guests));
    info!(
        correlation_id = %correlation_id,
        room_id = %room.id,
        nights = quote.nights(),
        total_price = %quote.total_price(),
        is_valid = quote.is_valid(),
        "Quote computed"
    );

    Ok(Json(QuoteResponse {
        room_id: room.id.clone(),
        price_per_night: room.price,
        room_capacity: room.capacity,
        quote,
    }))
}

/// Handler for GET /date-bounds.
async fn date_bounds_handler(
    State(state): State<AppState>,
    query: Result<Query<DateBoundsQuery>, QueryRejection>,
) -> Result<Json<DateBounds>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let Query(query) = query.map_err(|rejection| query_failure(correlation_id, rejection))?;
    let check_in = query
        .check_in()
        .map_err(|err| engine_failure(correlation_id, err))?;

    Ok(Json(date_bounds(state.clock(), check_in)))
}

/// Handler for POST /bookings/draft.
///
/// Returns the booking record to hand to the booking store. Nothing is saved.
async fn draft_booking_handler(
    State(state): State<AppState>,
    payload: Result<Json<DraftBookingRequest>, JsonRejection>,
) -> Result<Json<Booking>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing booking draft request");

    let Json(request) = payload.map_err(|rejection| json_failure(correlation_id, rejection))?;
    let room = state
        .config()
        .get_room(&request.room_id)
        .map_err(|err| engine_failure(correlation_id, err))?;
    let form = request
        .form()
        .map_err(|err| engine_failure(correlation_id, err))?;

    let booking = draft_booking(room, &request.user_id, &form, Utc::now())
        .map_err(|err| engine_failure(correlation_id, err.into()))?;

    info!(
        correlation_id = %correlation_id,
        user_id = %booking.user_id,
        room_id = %booking.room_id,
        nights = booking.nights(),
        total_price = %booking.total_price,
        "Booking drafted"
    );
    Ok(Json(booking))
}

/// Handler for POST /bookings/revise.
async fn revise_booking_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReviseBookingRequest>, JsonRejection>,
) -> Result<Json<Booking>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing booking revision request");

    let Json(request) = payload.map_err(|rejection| json_failure(correlation_id, rejection))?;
    let room = state
        .config()
        .get_room(&request.booking.room_id)
        .map_err(|err| engine_failure(correlation_id, err))?;
    let edit = request
        .edit()
        .map_err(|err| engine_failure(correlation_id, err))?;

    let booking = revise_booking(&request.booking, room, &edit)
        .map_err(|err| engine_failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        booking_id = ?booking.id,
        nights = booking.nights(),
        total_price = %booking.total_price,
        "Booking revised"
    );
    Ok(Json(booking))
}

/// Logs an engine error and converts it to a response.
fn engine_failure(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error.into()
}

/// Converts a query string rejection to a 400 response.
fn query_failure(correlation_id: Uuid, rejection: QueryRejection) -> ApiErrorResponse {
    let body_text = rejection.body_text();
    warn!(correlation_id = %correlation_id, error = %body_text, "Query string error");
    ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
}

/// Converts a JSON body rejection to a 400 response.
fn json_failure(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
