//! Stay request validation and quoting.
//!
//! [`validate_stay_request`] is the gate a booking must pass before it is
//! submitted. [`quote_stay`] is the per-keystroke entry point: it always
//! returns a quote, carrying the validation failure inside it.

use rust_decimal::Decimal;

use crate::error::StayValidationError;
use crate::models::{StayQuote, StayRequest};

use super::nights::compute_nights;
use super::total::compute_total;

/// Validates a stay request and returns its quote.
///
/// Checks run in this order, and the first failure is returned:
///
/// 1. `guest_count` must be at least one (`InvalidGuestCount`)
/// 2. `guest_count` must not exceed `room_capacity` (`CapacityExceeded`)
/// 3. `price_per_night` must not be negative (`NegativePrice`)
/// 4. check-out must be strictly after check-in (`InvalidDateRange`)
/// 5. the total must fit in a decimal amount (`PriceOverflow`)
///
/// Guest checks come first so an over-full room is reported whatever the
/// dates say.
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::validate_stay_request;
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
///
/// let quote = validate_stay_request(&request).unwrap();
/// assert_eq!(quote.nights(), 4);
/// assert_eq!(quote.total_price(), Decimal::new(20000, 0));
/// assert!(quote.is_valid());
/// ```
pub fn validate_stay_request(request: &StayRequest) -> Result<StayQuote, StayValidationError> {
    if request.guest_count == 0 {
        return Err(StayValidationError::InvalidGuestCount);
    }

    if request.guest_count > request.room_capacity {
        return Err(StayValidationError::CapacityExceeded {
            guests: request.guest_count,
            capacity: request.room_capacity,
        });
    }

    if request.price_per_night < Decimal::ZERO {
        return Err(StayValidationError::NegativePrice {
            price: request.price_per_night,
        });
    }

    let nights = compute_nights(request.check_in_date, request.check_out_date);
    if nights == 0 {
        return Err(StayValidationError::InvalidDateRange {
            check_in: request.check_in_date,
            check_out: request.check_out_date,
        });
    }

    let total = compute_total(nights, request.price_per_night).ok_or(
        StayValidationError::PriceOverflow {
            nights,
            price: request.price_per_night,
        },
    )?;

    Ok(StayQuote::valid(nights, total))
}

/// Quotes a stay request, whether or not it is valid.
///
/// Nights and total are always filled in so a form can keep showing them
/// while the guest corrects their input. A total too large to represent is
/// reported as zero alongside `PriceOverflow`.
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::quote_stay;
/// use stay_engine::error::StayValidationError;
/// use stay_engine::models::StayRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = StayRequest {
///     check_in_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     check_out_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     guest_count: 5,
///     price_per_night: Decimal::new(1000, 0),
///     room_capacity: 4,
/// };
///
/// let quote = quote_stay(&request);
/// assert!(!quote.is_valid());
/// assert_eq!(quote.nights(), 2);
/// assert!(matches!(
///     quote.validation_error(),
///     Some(StayValidationError::CapacityExceeded { .. })
/// ));
/// ```
pub fn quote_stay(request: &StayRequest) -> StayQuote {
    match validate_stay_request(request) {
        Ok(quote) => quote,
        Err(error) => {
            let nights = compute_nights(request.check_in_date, request.check_out_date);
            let total = compute_total(nights, request.price_per_night).unwrap_or(Decimal::ZERO);
            StayQuote::invalid(nights, total, error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_request(
        check_in: &str,
        check_out: &str,
        guests: u32,
        price: &str,
        capacity: u32,
    ) -> StayRequest {
        StayRequest {
            check_in_date: make_date(check_in),
            check_out_date: make_date(check_out),
            guest_count: guests,
            price_per_night: dec(price),
            room_capacity: capacity,
        }
    }

    #[test]
    fn test_end_to_end_four_night_quote() {
        let request = create_request("2024-06-01", "2024-06-05", 2, "5000", 4);
        let quote = validate_stay_request(&request).unwrap();

        assert_eq!(quote.nights(), 4);
        assert_eq!(quote.total_price(), dec("20000"));
        assert!(quote.is_valid());
        assert!(quote.validation_error().is_none());
    }

    #[test]
    fn test_capacity_exceeded_with_valid_dates() {
        let request = create_request("2024-06-01", "2024-06-05", 5, "5000", 4);
        assert_eq!(
            validate_stay_request(&request),
            Err(StayValidationError::CapacityExceeded {
                guests: 5,
                capacity: 4
            })
        );
    }

    #[test]
    fn test_capacity_exceeded_with_invalid_dates() {
        let request = create_request("2024-06-05", "2024-06-01", 5, "5000", 4);
        assert!(matches!(
            validate_stay_request(&request),
            Err(StayValidationError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_checkout_before_checkin_is_invalid_date_range() {
        let request = create_request("2024-03-10", "2024-03-09", 2, "5000", 4);
        assert_eq!(
            validate_stay_request(&request),
            Err(StayValidationError::InvalidDateRange {
                check_in: make_date("2024-03-10"),
                check_out: make_date("2024-03-09"),
            })
        );
    }

    #[test]
    fn test_same_day_stay_is_invalid_date_range() {
        let request = create_request("2024-03-10", "2024-03-10", 1, "5000", 4);
        assert!(matches!(
            validate_stay_request(&request),
            Err(StayValidationError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_guests_equal_to_capacity_is_allowed() {
        let request = create_request("2024-06-01", "2024-06-02", 4, "5000", 4);
        assert!(validate_stay_request(&request).is_ok());
    }

    #[test]
    fn test_zero_guests_is_rejected() {
        let request = create_request("2024-06-01", "2024-06-02", 0, "5000", 4);
        assert_eq!(
            validate_stay_request(&request),
            Err(StayValidationError::InvalidGuestCount)
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let request = create_request("2024-06-01", "2024-06-02", 1, "-10", 4);
        assert_eq!(
            validate_stay_request(&request),
            Err(StayValidationError::NegativePrice { price: dec("-10") })
        );
    }

    #[test]
    fn test_free_room_is_valid() {
        let request = create_request("2024-06-01", "2024-06-03", 1, "0", 2);
        let quote = validate_stay_request(&request).unwrap();
        assert_eq!(quote.nights(), 2);
        assert_eq!(quote.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_quote_stay_valid_matches_validation() {
        let request = create_request("2024-06-01", "2024-06-05", 2, "5000", 4);
        assert_eq!(quote_stay(&request), validate_stay_request(&request).unwrap());
    }

    #[test]
    fn test_quote_stay_invalid_range_has_zero_nights_and_total() {
        let request = create_request("2024-03-10", "2024-03-09", 2, "5000", 4);
        let quote = quote_stay(&request);

        assert_eq!(quote.nights(), 0);
        assert_eq!(quote.total_price(), Decimal::ZERO);
        assert!(!quote.is_valid());
        assert!(matches!(
            quote.validation_error(),
            Some(StayValidationError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_quote_stay_over_capacity_still_prices_nights() {
        let request = create_request("2024-06-01", "2024-06-04", 6, "1200", 4);
        let quote = quote_stay(&request);

        assert_eq!(quote.nights(), 3);
        assert_eq!(quote.total_price(), dec("3600"));
        assert!(!quote.is_valid());
    }

    #[test]
    fn test_total_past_decimal_range_is_price_overflow() {
        let request = create_request(
            "2024-06-10",
            "2024-06-12",
            2,
            "70000000000000000000000000000",
            4,
        );
        assert_eq!(
            validate_stay_request(&request),
            Err(StayValidationError::PriceOverflow {
                nights: 2,
                price: dec("70000000000000000000000000000"),
            })
        );
    }

    #[test]
    fn test_quote_stay_price_overflow_reports_zero_total() {
        let request = create_request(
            "2024-06-10",
            "2024-06-12",
            2,
            "79000000000000000000000000000",
            4,
        );
        let quote = quote_stay(&request);

        assert_eq!(quote.nights(), 2);
        assert_eq!(quote.total_price(), Decimal::ZERO);
        assert!(!quote.is_valid());
        assert!(matches!(
            quote.validation_error(),
            Some(StayValidationError::PriceOverflow { .. })
        ));
    }

    #[test]
    fn test_single_night_at_huge_price_is_valid() {
        let request = create_request(
            "2024-06-10",
            "2024-06-11",
            1,
            "70000000000000000000000000000",
            4,
        );
        let quote = validate_stay_request(&request).unwrap();
        assert_eq!(quote.total_price(), dec("70000000000000000000000000000"));
    }

    fn any_request() -> impl Strategy<Value = StayRequest> {
        (
            0i64..3650,
            -30i64..60,
            0u32..10,
            0i64..1_000_000,
            1u32..10,
        )
            .prop_map(|(start, length, guests, price_minor, capacity)| {
                let check_in = make_date("2020-01-01") + chrono::Duration::days(start);
                StayRequest {
                    check_in_date: check_in,
                    check_out_date: check_in + chrono::Duration::days(length),
                    guest_count: guests,
                    price_per_night: Decimal::new(price_minor, 2),
                    room_capacity: capacity,
                }
            })
    }

    proptest! {
        #[test]
        fn prop_total_is_always_nights_times_price(request in any_request()) {
            let quote = quote_stay(&request);
            prop_assert_eq!(
                quote.total_price(),
                Decimal::from(quote.nights()) * request.price_per_night
            );
        }

        #[test]
        fn prop_quote_validity_agrees_with_validation(request in any_request()) {
            let quote = quote_stay(&request);
            match validate_stay_request(&request) {
                Ok(valid) => {
                    prop_assert!(quote.is_valid());
                    prop_assert_eq!(quote, valid);
                }
                Err(error) => {
                    prop_assert!(!quote.is_valid());
                    prop_assert_eq!(quote.validation_error(), Some(error));
                }
            }
        }

        #[test]
        fn prop_non_positive_length_is_never_valid(request in any_request()) {
            if request.check_out_date <= request.check_in_date {
                let quote = quote_stay(&request);
                prop_assert_eq!(quote.nights(), 0);
                prop_assert!(!quote.is_valid());
            }
        }
    }
}
