//! Money helpers using rust_decimal for precision
//!
//! Amounts are stored and serialized as `f64` (GHS, two decimal places) but
//! every sum or product goes through `Decimal`.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum accepted unit price (GHS)
pub const MAX_UNIT_PRICE: f64 = 1_000_000.0;

/// Convert f64 to Decimal; non-finite input becomes zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// quantity × unit price
pub fn line_total(quantity: i64, unit_price: f64) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Sum of amounts, rounded once at the end
pub fn sum<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    to_f64(amounts.into_iter().map(to_decimal).sum())
}

/// Apply a fractional discount (0.10 = 10 %) and return the discount amount
pub fn discount_amount(subtotal: f64, rate: f64) -> f64 {
    to_f64(to_decimal(subtotal) * to_decimal(rate))
}

/// Render an amount as `GH₵690.00`
pub fn format_ghs(amount: f64) -> String {
    format!("GH₵{:.2}", to_f64(to_decimal(amount)))
}
