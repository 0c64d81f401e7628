//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by accrued amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds an amount to two decimal places, half away from zero.
///
/// The result always carries exactly two fractional digits, so `7000`
/// becomes `7000.00`.
///
/// # Example
///
/// ```
/// use salary_rate::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("2.345").unwrap()).to_string(), "2.35");
/// assert_eq!(round_currency(Decimal::from_str("-2.345").unwrap()).to_string(), "-2.35");
/// assert_eq!(round_currency(Decimal::from(7000)).to_string(), "7000.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}
