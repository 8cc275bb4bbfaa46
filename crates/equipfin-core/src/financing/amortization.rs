//! Annuity (level payment) amortization engine.
//!
//! Converts a financed principal, a nominal annual rate and a term in months
//! into a fixed monthly installment and a full schedule splitting each
//! installment into interest and principal. Amounts are carried at full
//! decimal precision between periods; rounding happens only at presentation.

use log::trace;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FinanceError;
use crate::time_value::{annuity_payment, monthly_rate};
use crate::types::{Money, Percent, Rate};
use crate::FinanceResult;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Terms of an interest-bearing loan or lease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount financed (price minus down payment)
    pub principal: Money,
    /// Nominal annual rate in percent, compounded monthly (18 = 18%)
    pub annual_rate_percent: Percent,
    /// Number of monthly installments
    pub term_months: u32,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One row of the amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPeriod {
    /// 1-based period number
    pub period: u32,
    /// Installment paid this period (constant across the schedule)
    pub payment: Money,
    /// Interest accrued on the opening balance
    pub interest_component: Money,
    /// Portion of the installment retiring principal
    pub principal_component: Money,
    /// Balance after this period's principal is applied
    pub remaining_balance: Money,
}

/// Monthly installment, totals and the full schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Periodic rate derived from the annual percentage
    pub monthly_rate: Rate,
    pub monthly_payment: Money,
    /// `monthly_payment * term_months`; excludes any down payment
    pub total_paid: Money,
    /// `total_paid - principal`
    pub total_interest: Money,
    pub schedule: Vec<PaymentPeriod>,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Validate loan terms without computing anything.
pub fn validate_terms(terms: &LoanTerms) -> FinanceResult<()> {
    if terms.principal <= Decimal::ZERO {
        return Err(FinanceError::invalid(
            "principal",
            "Financed amount must be positive",
        ));
    }
    if terms.term_months == 0 {
        return Err(FinanceError::invalid(
            "term_months",
            "Term must be at least 1 month",
        ));
    }
    if terms.annual_rate_percent < Decimal::ZERO {
        return Err(FinanceError::invalid(
            "annual_rate_percent",
            "Interest rate cannot be negative",
        ));
    }
    Ok(())
}

/// Compute the level monthly installment and its amortization schedule.
///
/// The final period retires whatever balance remains, so the schedule always
/// ends at exactly zero and the principal components sum to the principal.
pub fn compute_annuity(terms: &LoanTerms) -> FinanceResult<AmortizationResult> {
    validate_terms(terms)?;

    let rate = monthly_rate(terms.annual_rate_percent);
    let monthly_payment = annuity_payment(terms.principal, rate, terms.term_months)?;
    let schedule = build_schedule(terms.principal, rate, monthly_payment, terms.term_months)?;

    let total_paid = monthly_payment
        .checked_mul(Decimal::from(terms.term_months))
        .ok_or_else(|| FinanceError::invalid("principal", "Total paid exceeds the decimal range"))?;
    let total_interest = total_paid - terms.principal;

    Ok(AmortizationResult {
        monthly_rate: rate,
        monthly_payment,
        total_paid,
        total_interest,
        schedule,
    })
}

fn build_schedule(
    principal: Money,
    rate: Rate,
    payment: Money,
    term_months: u32,
) -> FinanceResult<Vec<PaymentPeriod>> {
    let mut schedule = Vec::with_capacity(term_months as usize);
    let mut balance = principal;

    for period in 1..=term_months {
        let interest = balance.checked_mul(rate).ok_or_else(|| {
            FinanceError::invalid("principal", "Interest exceeds the decimal range")
        })?;

        let principal_component = if period == term_months {
            // Final period absorbs the sub-cent residual left by the level payment.
            balance
        } else {
            payment - interest
        };

        balance = (balance - principal_component).max(Decimal::ZERO);

        trace!(
            "period {period}: interest={interest} principal={principal_component} balance={balance}"
        );

        schedule.push(PaymentPeriod {
            period,
            payment,
            interest_component: interest,
            principal_component,
            remaining_balance: balance,
        });
    }

    Ok(schedule)
}
