//! Storefront quotes for leasing and 0% installment plans.
//!
//! A quote fills unspecified inputs from [`FinancingConfig`], runs the pure
//! engine, and adds warnings for inputs outside the offered presets plus
//! whole-unit currency labels. Out-of-range presets are never rejected.

use chrono::{Days, NaiveDate};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::FinancingConfig;
use crate::error::FinanceError;
use crate::financing::amortization::{compute_annuity, LoanTerms, PaymentPeriod};
use crate::financing::installment::compute_equal_installment;
use crate::format::{currency_label, round_money, share_percent};
use crate::types::*;
use crate::FinanceResult;

// ---------------------------------------------------------------------------
// Leasing
// ---------------------------------------------------------------------------

/// Leasing request as entered on a product page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeasingQuoteInput {
    /// Equipment price
    pub price: Money,
    /// Down payment; defaults to the configured share of the price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<Money>,
    /// Nominal annual rate in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_rate_percent: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_months: Option<u32>,
}

/// Display strings for a leasing quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeasingLabels {
    pub monthly_payment: String,
    pub overpayment: String,
    pub price: String,
    pub down_payment: String,
    pub financed_amount: String,
    pub total_amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeasingQuote {
    pub price: Money,
    pub down_payment: Money,
    /// Down payment as a whole percentage of the price
    pub down_payment_share_percent: Decimal,
    /// Price minus down payment
    pub financed_amount: Money,
    pub annual_rate_percent: Percent,
    pub term_months: u32,
    pub monthly_payment: Money,
    /// All installments plus the down payment
    pub total_amount: Money,
    /// `total_amount - price`
    pub overpayment: Money,
    pub schedule: Vec<PaymentPeriod>,
    pub labels: LeasingLabels,
}

/// Quote a leasing deal: down payment up front, annuity on the remainder.
pub fn quote_leasing(
    input: &LeasingQuoteInput,
    config: &FinancingConfig,
) -> FinanceResult<ComputationOutput<LeasingQuote>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    config.validate()?;

    if input.price <= Decimal::ZERO {
        return Err(FinanceError::invalid("price", "Price must be positive"));
    }

    let down_payment = input
        .down_payment
        .unwrap_or_else(|| round_money(input.price * config.default_down_payment_share, 0));
    if down_payment < Decimal::ZERO {
        return Err(FinanceError::invalid(
            "down_payment",
            "Down payment cannot be negative",
        ));
    }

    let rate = input
        .annual_rate_percent
        .unwrap_or(config.default_annual_rate_percent);
    let term_months = input.term_months.unwrap_or(config.default_leasing_term);
    debug!(
        "leasing quote: price={} down={down_payment} rate={rate}% term={term_months}",
        input.price
    );

    if !config.leasing_terms.contains(&term_months) {
        warnings.push(format!(
            "Leasing term of {term_months} months is not among the offered terms {:?}",
            config.leasing_terms
        ));
    }
    if rate < config.min_rate_percent || rate > config.max_rate_percent {
        warnings.push(format!(
            "Rate {rate}% is outside the usual range {}%–{}%",
            config.min_rate_percent, config.max_rate_percent
        ));
    }
    if down_payment > input.price * config.max_down_payment_share {
        warnings.push(format!(
            "Down payment exceeds {}% of the price",
            share_percent(config.max_down_payment_share, Decimal::ONE)
        ));
    }

    let financed_amount = input.price - down_payment;
    if financed_amount <= Decimal::ZERO {
        return Err(FinanceError::invalid(
            "down_payment",
            "Down payment covers the full price; nothing left to finance",
        ));
    }

    let amortization = compute_annuity(&LoanTerms {
        principal: financed_amount,
        annual_rate_percent: rate,
        term_months,
    })?;

    let total_amount = amortization
        .total_paid
        .checked_add(down_payment)
        .ok_or_else(|| FinanceError::invalid("price", "Total amount exceeds the decimal range"))?;
    let overpayment = total_amount - input.price;

    let currency = &config.currency;
    let labels = LeasingLabels {
        monthly_payment: currency_label(amortization.monthly_payment, currency),
        overpayment: currency_label(overpayment, currency),
        price: currency_label(input.price, currency),
        down_payment: currency_label(down_payment, currency),
        financed_amount: currency_label(financed_amount, currency),
        total_amount: currency_label(total_amount, currency),
    };

    for w in &warnings {
        warn!("{w}");
    }

    let output = LeasingQuote {
        price: input.price,
        down_payment,
        down_payment_share_percent: share_percent(down_payment, input.price),
        financed_amount,
        annual_rate_percent: rate,
        term_months,
        monthly_payment: amortization.monthly_payment,
        total_amount,
        overpayment,
        schedule: amortization.schedule,
        labels,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Annuity leasing (level monthly payment, nominal rate compounded monthly)",
        &serde_json::json!({
            "price": input.price.to_string(),
            "down_payment": down_payment.to_string(),
            "annual_rate_percent": rate.to_string(),
            "monthly_rate": amortization.monthly_rate.to_string(),
            "term_months": term_months,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Installment
// ---------------------------------------------------------------------------

/// 0% installment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentQuoteInput {
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_months: Option<u32>,
    /// Date the plan starts; due dates are omitted without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentPayment {
    /// 1-based installment number
    pub number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub amount: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentLabels {
    pub monthly_payment: String,
    pub total_paid: String,
    pub overpayment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentQuote {
    pub price: Money,
    pub term_months: u32,
    pub monthly_payment: Money,
    pub total_paid: Money,
    /// Always zero
    pub overpayment: Money,
    pub payments: Vec<InstallmentPayment>,
    pub labels: InstallmentLabels,
}

/// Quote a 0% installment plan, with due dates when a start date is given.
pub fn quote_installment(
    input: &InstallmentQuoteInput,
    config: &FinancingConfig,
) -> FinanceResult<ComputationOutput<InstallmentQuote>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    config.validate()?;

    let term_months = input.term_months.unwrap_or(config.default_installment_term);
    debug!("installment quote: price={} term={term_months}", input.price);

    if !config.installment_terms.contains(&term_months) {
        warnings.push(format!(
            "Installment term of {term_months} months is not among the offered terms {:?}",
            config.installment_terms
        ));
    }

    let flat = compute_equal_installment(input.price, term_months)?;

    let interval = config.installment_interval_days;
    let mut payments = Vec::with_capacity(flat.periods.len());
    for period in &flat.periods {
        let due_date = input
            .start_date
            .map(|start_date| nth_due_date(start_date, period.period, interval))
            .transpose()?;
        payments.push(InstallmentPayment {
            number: period.period,
            due_date,
            amount: period.payment,
        });
    }

    for w in &warnings {
        warn!("{w}");
    }

    let currency = &config.currency;
    let output = InstallmentQuote {
        price: input.price,
        term_months,
        monthly_payment: flat.payment,
        total_paid: flat.total_paid,
        overpayment: Decimal::ZERO,
        payments,
        labels: InstallmentLabels {
            monthly_payment: currency_label(flat.payment, currency),
            total_paid: currency_label(flat.total_paid, currency),
            overpayment: currency_label(Decimal::ZERO, currency),
        },
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "0% installment (equal split, no interest)",
        &serde_json::json!({
            "price": input.price.to_string(),
            "term_months": term_months,
            "start_date": input.start_date,
            "interval_days": config.installment_interval_days,
        }),
        warnings,
        elapsed,
        output,
    ))
}

fn nth_due_date(start: NaiveDate, number: u32, interval_days: u32) -> FinanceResult<NaiveDate> {
    let offset = u64::from(number) * u64::from(interval_days);
    start
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| {
            FinanceError::invalid("start_date", "Due dates run past the supported calendar")
        })
}
