use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::FinanceError;
use crate::types::{Money, Percent, Rate};
use crate::FinanceResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Nominal annual percentage to a simple monthly periodic rate (18 -> 0.015).
pub fn monthly_rate(annual_rate_percent: Percent) -> Rate {
    annual_rate_percent / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR
}

/// Compound growth factor `(1 + rate)^nper`, or `None` past the decimal range.
pub fn compound_factor(rate: Rate, nper: u32) -> Option<Decimal> {
    (Decimal::ONE + rate).checked_powu(u64::from(nper))
}

/// Level payment that fully amortizes `principal` over `nper` periods.
///
/// PMT = P * r(1 + r)^n / ((1 + r)^n - 1), or P / n when the rate is zero.
/// When `(1 + r)^n` leaves the decimal range the payment is its limit `P * r`,
/// which is already exact at 28 significant digits.
/// Amounts are positive (payer's view), unlike the spreadsheet PMT sign convention.
pub fn annuity_payment(principal: Money, rate: Rate, nper: u32) -> FinanceResult<Money> {
    if nper == 0 {
        return Err(FinanceError::invalid(
            "term_months",
            "Number of periods must be > 0",
        ));
    }

    let periods = Decimal::from(nper);
    if rate.is_zero() {
        return Ok(principal / periods);
    }

    let payment_factor = match compound_factor(rate, nper) {
        Some(factor) => {
            let denominator = factor - Decimal::ONE;
            // Rates below the 28-digit resolution leave the factor at exactly one.
            if denominator.is_zero() {
                return Ok(principal / periods);
            }
            (factor / denominator).checked_mul(rate)
        }
        None => Some(rate),
    };

    payment_factor
        .and_then(|f| f.checked_mul(principal))
        .ok_or_else(|| {
            FinanceError::invalid("principal", "Annuity payment exceeds the decimal range")
        })
}
