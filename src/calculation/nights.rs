//! Night counting and stay date parsing.
//!
//! Nights are counted on calendar dates, never on elapsed time, so a stay
//! that crosses a daylight-saving change is still billed by the calendar.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{EngineError, EngineResult};

/// Returns the number of nights between check-in and check-out.
///
/// The result is the whole-day difference between the two calendar dates.
/// When `check_out` is on or before `check_in` the result is `0`.
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::compute_nights;
/// use chrono::NaiveDate;
///
/// let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
/// assert_eq!(compute_nights(check_in, check_out), 3);
/// assert_eq!(compute_nights(check_out, check_in), 0);
/// ```
pub fn compute_nights(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Parses a stay date from its ISO-8601 text form.
///
/// Plain dates (`YYYY-MM-DD`) are the normal input. Date-times, with or
/// without an offset, are accepted and reduced to the calendar date they
/// name, so a time of day can never move the night count.
///
/// # Arguments
///
/// * `field` - The name of the field being parsed, used in the error
/// * `value` - The raw text
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::parse_stay_date;
/// use chrono::NaiveDate;
///
/// let date = parse_stay_date("checkIn", "2024-06-01T23:30:00-05:00").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// assert!(parse_stay_date("checkIn", "06/01/2024").is_err());
/// ```
pub fn parse_stay_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    // Keep the local calendar date the caller wrote, ignoring the offset.
    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date_time.date_naive());
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(date_time.date());
    }

    Err(EngineError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_three_night_stay() {
        assert_eq!(
            compute_nights(make_date("2024-01-01"), make_date("2024-01-04")),
            3
        );
    }

    #[test]
    fn test_same_day_is_zero_nights() {
        let day = make_date("2024-05-15");
        assert_eq!(compute_nights(day, day), 0);
    }

    #[test]
    fn test_reversed_dates_are_zero_not_negative() {
        assert_eq!(
            compute_nights(make_date("2024-03-10"), make_date("2024-03-09")),
            0
        );
    }

    #[test]
    fn test_daylight_saving_weekend_counts_calendar_nights() {
        // US clocks spring forward on 2024-03-10.
        assert_eq!(
            compute_nights(make_date("2024-03-09"), make_date("2024-03-11")),
            2
        );
        // EU clocks fall back on 2024-10-27.
        assert_eq!(
            compute_nights(make_date("2024-10-26"), make_date("2024-10-28")),
            2
        );
    }

    #[test]
    fn test_stay_across_month_and_leap_day() {
        assert_eq!(
            compute_nights(make_date("2024-02-27"), make_date("2024-03-02")),
            4
        );
    }

    #[test]
    fn test_stay_across_year_end() {
        assert_eq!(
            compute_nights(make_date("2024-12-30"), make_date("2025-01-02")),
            3
        );
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_stay_date("checkIn", "2024-06-01").unwrap(),
            make_date("2024-06-01")
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parse_stay_date("checkIn", " 2024-06-01 ").unwrap(),
            make_date("2024-06-01")
        );
    }

    #[test]
    fn test_parse_date_time_keeps_written_date() {
        assert_eq!(
            parse_stay_date("checkOut", "2024-06-01T23:30:00-05:00").unwrap(),
            make_date("2024-06-01")
        );
        assert_eq!(
            parse_stay_date("checkOut", "2024-06-01T00:15:00Z").unwrap(),
            make_date("2024-06-01")
        );
        assert_eq!(
            parse_stay_date("checkOut", "2024-06-01T08:00:00.000").unwrap(),
            make_date("2024-06-01")
        );
    }

    #[test]
    fn test_parse_rejects_non_iso_input() {
        for value in ["", "01/06/2024", "2024-13-01", "2024-02-30", "soon"] {
            match parse_stay_date("checkIn", value) {
                Err(EngineError::InvalidDate { field, value: v }) => {
                    assert_eq!(field, "checkIn");
                    assert_eq!(v, value);
                }
                other => panic!("Expected InvalidDate for {:?}, got {:?}", value, other),
            }
        }
    }

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        // 1970-01-01 through roughly 2070.
        (0i64..36_500).prop_map(|offset| {
            make_date("1970-01-01") + chrono::Duration::days(offset)
        })
    }

    proptest! {
        #[test]
        fn prop_nights_never_negative_and_match_day_difference(
            check_in in any_date(),
            check_out in any_date(),
        ) {
            let nights = compute_nights(check_in, check_out);
            let days = (check_out - check_in).num_days();
            prop_assert_eq!(i64::from(nights), days.max(0));
        }

        #[test]
        fn prop_adding_nights_to_check_in_reaches_check_out(
            check_in in any_date(),
            length in 1u32..400,
        ) {
            let check_out = check_in + chrono::Duration::days(i64::from(length));
            prop_assert_eq!(compute_nights(check_in, check_out), length);
        }
    }
}
