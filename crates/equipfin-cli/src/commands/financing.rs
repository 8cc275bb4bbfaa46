use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use equipfin_core::financing::amortization::{self, LoanTerms};
use equipfin_core::financing::installment;
use equipfin_core::financing::quote::{self, InstallmentQuoteInput, LeasingQuoteInput};
use equipfin_core::FinancingConfig;

use crate::input;

/// Arguments for the annuity schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct AnnuityArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount financed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual rate in percent (e.g. 18 for 18%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term: Option<u32>,
}

pub fn run_annuity(args: AnnuityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let (None, Some(principal)) = (&args.input, args.principal) {
        LoanTerms {
            principal,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term.ok_or("--term is required (or provide --input)")?,
        }
    } else if let Some(terms) = input::from_file_or_stdin(args.input.as_deref())? {
        terms
    } else {
        return Err("--principal, --rate and --term, --input <file.json> or stdin required".into());
    };

    let result = amortization::compute_annuity(&terms)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for an equal-installment split
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct InstallmentArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Full price to split
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Number of monthly installments
    #[arg(long)]
    pub term: Option<u32>,
}

#[derive(Deserialize)]
struct EqualInstallmentRequest {
    price: Decimal,
    term_months: u32,
}

pub fn run_installment(args: InstallmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: EqualInstallmentRequest = if let (None, Some(price)) = (&args.input, args.price) {
        EqualInstallmentRequest {
            price,
            term_months: args.term.ok_or("--term is required (or provide --input)")?,
        }
    } else if let Some(request) = input::from_file_or_stdin(args.input.as_deref())? {
        request
    } else {
        return Err("--price and --term, --input <file.json> or stdin required".into());
    };

    let result = installment::compute_equal_installment(request.price, request.term_months)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for a leasing quote
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LeasingArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Equipment price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Down payment (defaults to the configured share of the price)
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Nominal annual rate in percent (defaults to the configured rate)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months (defaults to the configured leasing term)
    #[arg(long)]
    pub term: Option<u32>,
}

pub fn run_leasing(
    args: LeasingArgs,
    config: &FinancingConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let leasing_input: LeasingQuoteInput = if let (None, Some(price)) = (&args.input, args.price) {
        LeasingQuoteInput {
            price,
            down_payment: args.down_payment,
            annual_rate_percent: args.rate,
            term_months: args.term,
        }
    } else if let Some(data) = input::from_file_or_stdin(args.input.as_deref())? {
        data
    } else {
        return Err("--price, --input <file.json> or stdin required for a leasing quote".into());
    };

    let result = quote::quote_leasing(&leasing_input, config)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for a 0% installment quote
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct InstallmentPlanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Equipment price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Term in months (defaults to the configured installment term)
    #[arg(long)]
    pub term: Option<u32>,

    /// First day of the plan (YYYY-MM-DD); enables due dates
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_installment_plan(
    args: InstallmentPlanArgs,
    config: &FinancingConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let plan_input: InstallmentQuoteInput = if let (None, Some(price)) = (&args.input, args.price) {
        InstallmentQuoteInput {
            price,
            term_months: args.term,
            start_date: args.start_date,
        }
    } else if let Some(data) = input::from_file_or_stdin(args.input.as_deref())? {
        data
    } else {
        return Err("--price, --input <file.json> or stdin required for an installment plan".into());
    };

    let result = quote::quote_installment(&plan_input, config)?;
    Ok(serde_json::to_value(result)?)
}
