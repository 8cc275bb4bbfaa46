//! 0% installment plan: the full price split evenly across the term.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FinanceError;
use crate::types::Money;
use crate::FinanceResult;

/// One installment of a flat plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatPeriod {
    pub period: u32,
    pub payment: Money,
}

/// Result of an equal-installment split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatScheduleResult {
    /// `price / term_months`
    pub payment: Money,
    /// Always equal to the price: no interest is charged
    pub total_paid: Money,
    pub periods: Vec<FlatPeriod>,
}

/// Split `price` into `term_months` equal interest-free installments.
pub fn compute_equal_installment(
    price: Money,
    term_months: u32,
) -> FinanceResult<FlatScheduleResult> {
    if price <= Decimal::ZERO {
        return Err(FinanceError::invalid("price", "Price must be positive"));
    }
    if term_months == 0 {
        return Err(FinanceError::invalid(
            "term_months",
            "Term must be at least 1 month",
        ));
    }

    let payment = price / Decimal::from(term_months);
    let periods = (1..=term_months)
        .map(|period| FlatPeriod { period, payment })
        .collect();

    Ok(FlatScheduleResult {
        payment,
        total_paid: price,
        periods,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_even_split() {
        let result = compute_equal_installment(dec!(120000), 6).unwrap();
        assert_eq!(result.total_paid, dec!(120000));
        assert_eq!(result.periods.len(), 6);
        assert!(result.periods.iter().all(|p| p.payment == dec!(20000)));
    }

    #[test]
    fn test_uneven_split_keeps_total() {
        let result = compute_equal_installment(dec!(100), 3).unwrap();
        assert_eq!(result.total_paid, dec!(100));
        assert_eq!(result.payment.round_dp(2), dec!(33.33));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(compute_equal_installment(Decimal::ZERO, 6).is_err());
        assert!(compute_equal_installment(dec!(-1), 6).is_err());
        assert!(compute_equal_installment(dec!(1000), 0).is_err());
    }
}
