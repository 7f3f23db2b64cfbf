//! Stay total calculation.

use rust_decimal::Decimal;

/// Returns the total price for a stay: `nights * price_per_night`.
///
/// Returns `None` when the total does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use stay_engine::calculation::compute_total;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_total(3, Decimal::new(1000, 0)), Some(Decimal::new(3000, 0)));
/// assert_eq!(compute_total(0, Decimal::new(1000, 0)), Some(Decimal::ZERO));
/// assert_eq!(compute_total(2, Decimal::MAX), None);
/// ```
pub fn compute_total(nights: u32, price_per_night: Decimal) -> Option<Decimal> {
    if nights == 0 {
        return Some(Decimal::ZERO);
    }
    Decimal::from(nights).checked_mul(price_per_night)
}
