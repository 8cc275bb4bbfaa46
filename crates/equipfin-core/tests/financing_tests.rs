use equipfin_core::financing::{amortization, installment, quote};
use equipfin_core::{FinanceError, FinancingConfig};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn terms(principal: Decimal, rate: Decimal, months: u32) -> amortization::LoanTerms {
    amortization::LoanTerms {
        principal,
        annual_rate_percent: rate,
        term_months: months,
    }
}

fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

// ===========================================================================
// Annuity schedule properties
// ===========================================================================

#[test]
fn test_payment_is_flat_across_schedule() {
    for (principal, rate, months) in [
        (dec!(2_000_000), dec!(18), 24),
        (dec!(350_000), dec!(9.9), 60),
        (dec!(12_500.75), dec!(36), 7),
        (dec!(1), dec!(0.1), 120),
    ] {
        let result = amortization::compute_annuity(&terms(principal, rate, months)).unwrap();
        assert_eq!(result.schedule.len(), months as usize);
        for row in &result.schedule {
            assert_eq!(row.payment, result.monthly_payment);
        }
    }
}

#[test]
fn test_periods_are_contiguous() {
    let result = amortization::compute_annuity(&terms(dec!(500_000), dec!(15), 36)).unwrap();
    let periods: Vec<u32> = result.schedule.iter().map(|p| p.period).collect();
    assert_eq!(periods, (1..=36).collect::<Vec<u32>>());
}

#[test]
fn test_balance_terminates_at_zero() {
    for months in [1, 3, 12, 18, 24, 36, 48, 60, 120] {
        let result = amortization::compute_annuity(&terms(dec!(777_777), dec!(18), months)).unwrap();
        let last = result.schedule.last().unwrap();
        assert_eq!(last.remaining_balance, Decimal::ZERO);
    }
}

#[test]
fn test_principal_is_conserved() {
    let principal = dec!(1_234_567.89);
    let result = amortization::compute_annuity(&terms(principal, dec!(21.5), 48)).unwrap();
    let repaid: Decimal = result.schedule.iter().map(|p| p.principal_component).sum();
    assert_close(repaid, principal, dec!(0.0001));
}

#[test]
fn test_balance_never_increases() {
    let result = amortization::compute_annuity(&terms(dec!(900_000), dec!(12), 60)).unwrap();
    let mut previous = dec!(900_000);
    for row in &result.schedule {
        assert!(row.remaining_balance <= previous);
        assert!(row.remaining_balance >= Decimal::ZERO);
        previous = row.remaining_balance;
    }
}

#[test]
fn test_interest_falls_and_principal_rises() {
    let result = amortization::compute_annuity(&terms(dec!(2_000_000), dec!(18), 24)).unwrap();
    for pair in result.schedule.windows(2) {
        assert!(pair[1].interest_component <= pair[0].interest_component);
        assert!(pair[1].principal_component >= pair[0].principal_component);
    }
}

#[test]
fn test_zero_rate_is_plain_division() {
    let principal = dec!(100_000);
    let result = amortization::compute_annuity(&terms(principal, Decimal::ZERO, 3)).unwrap();
    assert_eq!(result.monthly_payment, principal / dec!(3));
    assert!(result.schedule.iter().all(|p| p.interest_component.is_zero()));
    assert_eq!(result.schedule[2].remaining_balance, Decimal::ZERO);
}

#[test]
fn test_known_leasing_scenario() {
    // 2,000,000 financed at 18% over 24 months
    let result = amortization::compute_annuity(&terms(dec!(2_000_000), dec!(18), 24)).unwrap();
    assert_eq!(result.monthly_rate, dec!(0.015));
    assert_close(result.monthly_payment, dec!(99848.2039), dec!(0.0001));
    assert_eq!(result.schedule[0].interest_component, dec!(30000));
    assert_close(result.schedule[0].principal_component, dec!(69848.2039), dec!(0.0001));
    assert_eq!(result.schedule[23].remaining_balance, Decimal::ZERO);
}

#[test]
fn test_recomputation_is_idempotent() {
    let t = terms(dec!(640_000), dec!(17.25), 18);
    let first = amortization::compute_annuity(&t).unwrap();
    let second = amortization::compute_annuity(&t).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_terms_rejected() {
    for t in [
        terms(Decimal::ZERO, dec!(18), 24),
        terms(dec!(-10), dec!(18), 24),
        terms(dec!(2_000_000), dec!(18), 0),
        terms(dec!(2_000_000), dec!(-5), 24),
    ] {
        match amortization::compute_annuity(&t) {
            Err(FinanceError::InvalidInput { .. }) => {}
            other => panic!("expected InvalidInput for {t:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_terms_deserialize_from_json_numbers() {
    let t: amortization::LoanTerms =
        serde_json::from_str(r#"{"principal": 2000000, "annual_rate_percent": 18, "term_months": 24}"#)
            .unwrap();
    assert_eq!(t, terms(dec!(2_000_000), dec!(18), 24));
}

#[test]
fn test_fractional_term_rejected_at_boundary() {
    let parsed: Result<amortization::LoanTerms, _> =
        serde_json::from_str(r#"{"principal": 1000, "annual_rate_percent": 18, "term_months": 2.5}"#);
    assert!(parsed.is_err());
}

// ===========================================================================
// Equal installment
// ===========================================================================

#[test]
fn test_equal_installment_exact() {
    let result = installment::compute_equal_installment(dec!(120000), 6).unwrap();
    assert_eq!(result.total_paid, dec!(120000));
    assert_eq!(result.periods.len(), 6);
    for p in &result.periods {
        assert_eq!(p.payment, dec!(20000));
    }
}

#[test]
fn test_equal_installment_rejects_bad_input() {
    assert!(installment::compute_equal_installment(Decimal::ZERO, 6).is_err());
    assert!(installment::compute_equal_installment(dec!(120000), 0).is_err());
}

// ===========================================================================
// Quotes
// ===========================================================================

#[test]
fn test_leasing_quote_from_storefront_defaults() {
    let input: quote::LeasingQuoteInput = serde_json::from_str(r#"{"price": 1000000}"#).unwrap();
    let out = quote::quote_leasing(&input, &FinancingConfig::default()).unwrap();
    let q = out.result;
    assert_eq!(q.down_payment, dec!(300000));
    assert_eq!(q.financed_amount, dec!(700000));
    assert_eq!(q.total_amount - q.price, q.overpayment);
    assert_eq!(q.schedule.last().unwrap().remaining_balance, Decimal::ZERO);
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
}

#[test]
fn test_leasing_quote_custom_config() {
    let config = FinancingConfig::from_json_str(
        r#"{"default_annual_rate_percent": 0, "default_leasing_term": 12, "leasing_terms": [12]}"#,
    )
    .unwrap();
    let input = quote::LeasingQuoteInput {
        price: dec!(1_200_000),
        down_payment: Some(Decimal::ZERO),
        annual_rate_percent: None,
        term_months: None,
    };
    let out = quote::quote_leasing(&input, &config).unwrap();
    assert_eq!(out.result.monthly_payment, dec!(100000));
    assert_eq!(out.result.overpayment, Decimal::ZERO);
    assert!(out.warnings.iter().any(|w| w.contains("Rate 0%")));
}

#[test]
fn test_installment_quote_due_dates_step_by_interval() {
    let input: quote::InstallmentQuoteInput =
        serde_json::from_str(r#"{"price": 90000, "term_months": 3, "start_date": "2026-10-17"}"#).unwrap();
    let out = quote::quote_installment(&input, &FinancingConfig::default()).unwrap();
    let dates: Vec<String> = out
        .result
        .payments
        .iter()
        .map(|p| p.due_date.unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2026-11-16", "2026-12-16", "2027-01-15"]);
    assert_eq!(out.result.monthly_payment, dec!(30000));
}
