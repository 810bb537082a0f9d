use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Rounds `value` to `digits` decimal places, with ties rounded away from
/// zero.
///
/// The tie is decided on the exact binary value of `value`, so `0.0045`
/// (stored as `0.004499999...`) rounds down to `0.004`. Non-finite inputs,
/// and finite inputs too large or too small for a [`Decimal`], are returned
/// unchanged.
///
/// # Example
///
/// ```
/// use pricekit::support::round_half_up;
///
/// assert_eq!(round_half_up(1.23456, 3), 1.235);
/// assert_eq!(round_half_up(-2.5, 0), -3.0);
/// assert_eq!(round_half_up(0.0045, 3), 0.004);
/// ```
pub fn round_half_up(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    Decimal::from_f64_retain(value)
        .map(|exact| decimal_format(exact, digits))
        .unwrap_or(value)
}

/// Rounds an exact decimal to `digits` places, ties away from zero, and
/// returns the nearest `f64`.
///
/// # Example
///
/// ```
/// use pricekit::support::{Decimal, decimal_format};
///
/// // 0.0045 exactly
/// assert_eq!(decimal_format(Decimal::new(45, 4), 3), 0.005);
/// ```
pub fn decimal_format(value: Decimal, digits: u32) -> f64 {
    let rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    // Parsing the decimal text yields the closest f64; Decimal's own float
    // conversion can be off by an ulp.
    rounded
        .to_string()
        .parse()
        .ok()
        .or_else(|| rounded.to_f64())
        .unwrap_or(f64::NAN)
}
