use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::debug;

const VOLUME_DECIMAL_PLACES: u32 = 2;
const THOUSANDS_SEPARATOR: char = '.';

/// Parses a raw form value into a non-negative amount.
///
/// Anything that is not a valid number, or is negative, collapses to zero so the
/// preview always has something to show. The whole value must be numeric:
/// `"12abc"` is zero rather than 12, and so is a number with more significant
/// digits than a `Decimal` holds (28).
pub fn parse_amount(raw: &str) -> Decimal {
    let value = raw.trim();

    if value.is_empty() {
        return Decimal::ZERO;
    }

    let parsed = Decimal::from_str(value).or_else(|_| Decimal::from_scientific(value));

    match parsed {
        Ok(amount) => non_negative(amount),
        Err(error) => {
            debug!("Amount [{value}] could not be parsed, using zero | {error}");
            Decimal::ZERO
        }
    }
}

pub fn non_negative(amount: Decimal) -> Decimal {
    if amount.is_sign_negative() { Decimal::ZERO } else { amount }
}

/// Currency amount rendered the way the receipt prints it: rounded to whole
/// Rupiah with `.` grouping thousands.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Rupiah(pub Decimal);

impl Display for Rupiah {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let digits = rounded.abs().trunc().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(THOUSANDS_SEPARATOR);
            }
            grouped.push(digit);
        }

        write!(formatter, "{sign}{grouped}")
    }
}

/// Volume in liters, always shown with two decimal places.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Liters(pub Decimal);

impl Display for Liters {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let mut rounded = self.0.round_dp_with_strategy(VOLUME_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(VOLUME_DECIMAL_PLACES);
        write!(formatter, "{rounded}")
    }
}
