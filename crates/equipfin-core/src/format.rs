//! Presentation-boundary helpers: rounding and currency labels.
//!
//! The engines never round; these are applied only when amounts are shown.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Currency, Money};

const GROUP_SEPARATOR: char = '\u{a0}';

/// Round half away from zero to `dp` decimal places.
pub fn round_money(amount: Money, dp: u32) -> Money {
    amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole-unit label with grouped thousands, e.g. `1 234 568 ₽`.
pub fn currency_label(amount: Money, currency: &Currency) -> String {
    let rounded = round_money(amount, 0);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 8);
    if rounded < Decimal::ZERO {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped.push(GROUP_SEPARATOR);
    grouped.push_str(currency.symbol());
    grouped
}

/// Whole-number percentage of `part` in `whole`; zero when `whole` is zero.
pub fn share_percent(part: Money, whole: Money) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    round_money(part / whole * Decimal::ONE_HUNDRED, 0)
}
