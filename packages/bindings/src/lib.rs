use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use equipfin_core::financing::{amortization, installment, quote};
use equipfin_core::FinancingConfig;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Optional config override; the storefront defaults apply when absent.
fn parse_config(config_json: Option<String>) -> NapiResult<FinancingConfig> {
    match config_json {
        Some(json) => FinancingConfig::from_json_str(&json).map_err(to_napi_error),
        None => Ok(FinancingConfig::default()),
    }
}

// ---------------------------------------------------------------------------
// Engines
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_annuity(input_json: String) -> NapiResult<String> {
    let terms: amortization::LoanTerms =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = amortization::compute_annuity(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct EqualInstallmentBindingInput {
    price: Decimal,
    term_months: u32,
}

#[napi]
pub fn compute_equal_installment(input_json: String) -> NapiResult<String> {
    let input: EqualInstallmentBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = installment::compute_equal_installment(input.price, input.term_months)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

#[napi]
pub fn quote_leasing(input_json: String, config_json: Option<String>) -> NapiResult<String> {
    let input: quote::LeasingQuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = parse_config(config_json)?;
    let output = quote::quote_leasing(&input, &config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn quote_installment(input_json: String, config_json: Option<String>) -> NapiResult<String> {
    let input: quote::InstallmentQuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = parse_config(config_json)?;
    let output = quote::quote_installment(&input, &config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn default_financing_config() -> NapiResult<String> {
    serde_json::to_string(&FinancingConfig::default()).map_err(to_napi_error)
}
