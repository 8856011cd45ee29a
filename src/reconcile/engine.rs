use rust_decimal::Decimal;

use crate::types::non_negative;

/// Consistent view of a sale after reconciling price, volume and cash amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Reconciliation {
    /// Liters shown on the receipt.
    pub derived_volume: Decimal,
    /// Amount charged for the sale.
    pub derived_total: Decimal,
    /// True when the volume was computed from the cash amount and the volume
    /// field must not be edited by hand.
    pub volume_is_derived: bool
}

impl Reconciliation {
    pub fn empty() -> Self {
        Self {
            derived_volume: Decimal::ZERO,
            derived_total: Decimal::ZERO,
            volume_is_derived: false
        }
    }
}

/// Derives volume and total from the three form amounts.
///
/// A positive cash amount always wins over the entered volume. Without one the
/// volume drives the total, and without a positive unit price nothing can be
/// derived. Negative inputs count as zero. The function never fails: a result
/// that does not fit in a `Decimal` yields the empty reconciliation, and an
/// unrepresentable cash-driven volume never hands priority back to the volume.
pub fn evaluate(unit_price: Decimal, volume: Decimal, cash_amount: Decimal) -> Reconciliation {
    let price = non_negative(unit_price);
    let volume = non_negative(volume);
    let cash = non_negative(cash_amount);

    if price.is_zero() {
        return Reconciliation::empty();
    }

    if cash > Decimal::ZERO {
        return match cash.checked_div(price) {
            Some(derived_volume) => Reconciliation {
                derived_volume,
                derived_total: cash,
                volume_is_derived: true
            },
            None => Reconciliation::empty()
        };
    }

    if volume > Decimal::ZERO {
        if let Some(derived_total) = volume.checked_mul(price) {
            return Reconciliation {
                derived_volume: volume,
                derived_total,
                volume_is_derived: false
            };
        }
    }

    Reconciliation::empty()
}
